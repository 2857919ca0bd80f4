use crate::error::TimeError;

type Result<T> = std::result::Result<T, TimeError>;

/// Display language for formatted times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    English,
    Arabic,
}

/// A wall-clock time of day, stored in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(TimeError::OutOfRange {
                field: "hour",
                value: hour as u32,
            });
        }
        if minute > 59 {
            return Err(TimeError::OutOfRange {
                field: "minute",
                value: minute as u32,
            });
        }
        Ok(Self { hour, minute })
    }

    /// Zero-padded 24-hour "HH:MM".
    pub fn to_hhmm(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// 12-hour hour value: 0 and 12 both display as 12.
    fn hour_12(self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    fn is_pm(self) -> bool {
        self.hour >= 12
    }

    /// Format for display. English: "6:23 AM". Arabic: zero-padded hour in
    /// Eastern-Arabic numerals with ص (AM) / م (PM), e.g. "٠٦:٢٣ ص".
    pub fn format_12h(self, lang: Lang) -> String {
        let period_en = if self.is_pm() { "PM" } else { "AM" };
        match lang {
            Lang::English => format!("{}:{:02} {}", self.hour_12(), self.minute, period_en),
            Lang::Arabic => {
                let digits = format!("{:02}:{:02}", self.hour_12(), self.minute);
                let period = if self.is_pm() { "م" } else { "ص" };
                format!("{} {}", to_arabic_numerals(&digits), period)
            }
        }
    }
}

/// Parse a "HH:MM" 24-hour string. Fields may be 1 or 2 digits; anything
/// else, or values out of range, is rejected.
pub fn parse_hhmm(text: &str) -> Result<TimeOfDay> {
    let malformed = || TimeError::Malformed(text.to_string());

    let (h, m) = text.split_once(':').ok_or_else(malformed)?;
    if h.is_empty() || h.len() > 2 || m.is_empty() || m.len() > 2 {
        return Err(malformed());
    }
    let hour: u8 = h.parse().map_err(|_| malformed())?;
    let minute: u8 = m.parse().map_err(|_| malformed())?;
    TimeOfDay::new(hour, minute)
}

/// Replace Western digits with Eastern-Arabic numerals; all other
/// characters pass through unchanged.
pub fn to_arabic_numerals(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '٠',
            '1' => '١',
            '2' => '٢',
            '3' => '٣',
            '4' => '٤',
            '5' => '٥',
            '6' => '٦',
            '7' => '٧',
            '8' => '٨',
            '9' => '٩',
            other => other,
        })
        .collect()
}
