use fieldgate::record::Record;

/// Builds passport records starting from one that passes both phases.
pub struct PassportBuilder {
    record: Record,
}

impl PassportBuilder {
    /// A record that passes both phases.
    pub fn valid() -> Self {
        Self {
            record: Record::new()
                .with("byr", "1937")
                .with("iyr", "2017")
                .with("eyr", "2020")
                .with("hgt", "183cm")
                .with("hcl", "#fffffd")
                .with("ecl", "gry")
                .with("pid", "860033327")
                .with("cid", "147"),
        }
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.record.insert(field, value);
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.record = self.record.without(field);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}
