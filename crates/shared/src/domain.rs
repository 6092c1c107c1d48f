/// The four lab values the prediction model takes as input.
///
/// Order is significant: forms render fields and validation reports errors in
/// the order of [`BiomarkerField::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BiomarkerField {
    SerumCreatinine,
    Hemoglobin,
    Triglyceride,
    TotChole,
}

impl BiomarkerField {
    pub const ALL: [BiomarkerField; 4] = [
        BiomarkerField::SerumCreatinine,
        BiomarkerField::Hemoglobin,
        BiomarkerField::Triglyceride,
        BiomarkerField::TotChole,
    ];

    /// Field name as it appears in the request body. Must stay in sync with
    /// the serde names on `protocol::PredictRequest`.
    pub fn wire_name(self) -> &'static str {
        match self {
            BiomarkerField::SerumCreatinine => "serum_creatinine",
            BiomarkerField::Hemoglobin => "hemoglobin",
            BiomarkerField::Triglyceride => "triglyceride",
            BiomarkerField::TotChole => "tot_chole",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BiomarkerField::SerumCreatinine => "Serum creatinine (mg/dL)",
            BiomarkerField::Hemoglobin => "Hemoglobin (g/dL)",
            BiomarkerField::Triglyceride => "Triglycerides (mg/dL)",
            BiomarkerField::TotChole => "Total cholesterol (mg/dL)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            BiomarkerField::SerumCreatinine => "e.g. 1.2",
            BiomarkerField::Hemoglobin => "e.g. 14.5",
            BiomarkerField::Triglyceride => "e.g. 150",
            BiomarkerField::TotChole => "e.g. 200",
        }
    }
}

/// Binary output of the remote predictor.
///
/// Label `0` means the model flagged a likely consumption profile; `1` means
/// no indication was found. This is the model's convention, not a general one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    RiskDetected,
    Clear,
}

impl Classification {
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Classification::RiskDetected),
            1 => Some(Classification::Clear),
            _ => None,
        }
    }

    pub fn label(self) -> i64 {
        match self {
            Classification::RiskDetected => 0,
            Classification::Clear => 1,
        }
    }
}
