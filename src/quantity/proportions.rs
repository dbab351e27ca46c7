quantity!(Percent, "%");

impl Percent {
    pub const FULL: Self = Self(100.0);

    pub const fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }
}
