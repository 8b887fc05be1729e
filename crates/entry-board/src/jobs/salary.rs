use serde::Serialize;

/// Salary range offered as a browse filter. `min` is inclusive, `max` is
/// exclusive, and a missing `max` means the band has no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SalaryBand {
    pub label: &'static str,
    pub min: u64,
    pub max: Option<u64>,
}

impl SalaryBand {
    pub const ALL: SalaryBand = SalaryBand {
        label: "All Salaries",
        min: 0,
        max: None,
    };

    pub fn contains(&self, figure: u64) -> bool {
        figure >= self.min && self.max.map_or(true, |max| figure < max)
    }

    /// Whether this band is the catch-all "no filter" band.
    pub fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max.is_none()
    }
}

impl Default for SalaryBand {
    fn default() -> Self {
        Self::ALL
    }
}

static STANDARD_BANDS: [SalaryBand; 5] = [
    SalaryBand::ALL,
    SalaryBand {
        label: "Under $40,000",
        min: 0,
        max: Some(40_000),
    },
    SalaryBand {
        label: "$40,000 - $60,000",
        min: 40_000,
        max: Some(60_000),
    },
    SalaryBand {
        label: "$60,000 - $80,000",
        min: 60_000,
        max: Some(80_000),
    },
    SalaryBand {
        label: "$80,000+",
        min: 80_000,
        max: None,
    },
];

/// The fixed, ordered set of salary bands shown on the browse screen. The
/// first band is always [`SalaryBand::ALL`].
#[derive(Debug, Clone, Copy)]
pub struct SalaryBands;

impl SalaryBands {
    pub fn standard() -> &'static [SalaryBand] {
        &STANDARD_BANDS
    }

    /// Look up a band by label, ignoring case and surrounding whitespace.
    pub fn find(label: &str) -> Option<SalaryBand> {
        let label = label.trim();
        STANDARD_BANDS
            .iter()
            .find(|band| band.label.eq_ignore_ascii_case(label))
            .copied()
    }
}

/// Numeric value of a free-text salary: every non-digit is dropped and the
/// remaining digits are read as one integer.
///
/// "$45,000" yields 45000. A range such as "$45,000 - $55,000" concatenates
/// into 4500055000. Text without any digit yields 0, so it only lands in bands
/// starting at zero. Figures beyond `u64` saturate.
pub fn parse_salary_figure(raw: &str) -> u64 {
    raw.chars()
        .filter(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |figure, digit| {
            figure.saturating_mul(10).saturating_add(u64::from(digit))
        })
}
