quantity!(Ohms, "Ω");
