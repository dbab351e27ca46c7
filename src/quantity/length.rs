quantity!(Millimeters, "mm");
