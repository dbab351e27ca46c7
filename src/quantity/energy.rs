quantity!(WattHours, "Wh");
quantity!(Joules, "J");
