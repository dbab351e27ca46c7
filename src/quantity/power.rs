quantity!(Watts, "W");
