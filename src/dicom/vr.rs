//! Value representations
//!
//! A value representation (VR) is the two-letter code declaring how the bytes
//! of an element are to be interpreted.

use std::fmt;
use std::str::FromStr;

/// Every value representation defined by the standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vr {
    AE, AS, AT, CS, DA, DS, DT, FD, FL, IS, LO, LT, OB, OD, OF, OL, OV, OW,
    PN, SH, SL, SQ, SS, ST, SV, TM, UC, UI, UL, UN, UR, US, UT, UV,
}

impl Vr {
    /// Parses the two raw code bytes found in an explicit VR element header
    pub fn from_bytes(bytes: [u8; 2]) -> Option<Vr> {
        std::str::from_utf8(&bytes).ok()?.parse().ok()
    }

    /// The two-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Vr::AE => "AE", Vr::AS => "AS", Vr::AT => "AT", Vr::CS => "CS",
            Vr::DA => "DA", Vr::DS => "DS", Vr::DT => "DT", Vr::FD => "FD",
            Vr::FL => "FL", Vr::IS => "IS", Vr::LO => "LO", Vr::LT => "LT",
            Vr::OB => "OB", Vr::OD => "OD", Vr::OF => "OF", Vr::OL => "OL",
            Vr::OV => "OV", Vr::OW => "OW", Vr::PN => "PN", Vr::SH => "SH",
            Vr::SL => "SL", Vr::SQ => "SQ", Vr::SS => "SS", Vr::ST => "ST",
            Vr::SV => "SV", Vr::TM => "TM", Vr::UC => "UC", Vr::UI => "UI",
            Vr::UL => "UL", Vr::UN => "UN", Vr::UR => "UR", Vr::US => "US",
            Vr::UT => "UT", Vr::UV => "UV",
        }
    }

    /// Whether explicit VR encoding uses the 2 reserved bytes + 32-bit length
    /// header form for this VR
    pub fn has_long_length(&self) -> bool {
        matches!(
            self,
            Vr::OB | Vr::OD | Vr::OF | Vr::OL | Vr::OV | Vr::OW | Vr::SQ
                | Vr::SV | Vr::UC | Vr::UN | Vr::UR | Vr::UT | Vr::UV
        )
    }
}

impl FromStr for Vr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vr = match s {
            "AE" => Vr::AE, "AS" => Vr::AS, "AT" => Vr::AT, "CS" => Vr::CS,
            "DA" => Vr::DA, "DS" => Vr::DS, "DT" => Vr::DT, "FD" => Vr::FD,
            "FL" => Vr::FL, "IS" => Vr::IS, "LO" => Vr::LO, "LT" => Vr::LT,
            "OB" => Vr::OB, "OD" => Vr::OD, "OF" => Vr::OF, "OL" => Vr::OL,
            "OV" => Vr::OV, "OW" => Vr::OW, "PN" => Vr::PN, "SH" => Vr::SH,
            "SL" => Vr::SL, "SQ" => Vr::SQ, "SS" => Vr::SS, "ST" => Vr::ST,
            "SV" => Vr::SV, "TM" => Vr::TM, "UC" => Vr::UC, "UI" => Vr::UI,
            "UL" => Vr::UL, "UN" => Vr::UN, "UR" => Vr::UR, "US" => Vr::US,
            "UT" => Vr::UT, "UV" => Vr::UV,
            _ => return Err(format!("Unknown value representation: {}", s)),
        };

        Ok(vr)
    }
}

impl fmt::Display for Vr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
