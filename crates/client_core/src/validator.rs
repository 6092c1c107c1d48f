use shared::{
    domain::BiomarkerField,
    error::{FieldErrors, ValidationIssue},
    protocol::PredictRequest,
};

/// Raw form input, one string per biomarker field.
///
/// Owned by the form for its whole lifetime and mutated on every keystroke;
/// validation never consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub serum_creatinine: String,
    pub hemoglobin: String,
    pub triglyceride: String,
    pub tot_chole: String,
}

impl RawInput {
    pub fn get(&self, field: BiomarkerField) -> &str {
        match field {
            BiomarkerField::SerumCreatinine => &self.serum_creatinine,
            BiomarkerField::Hemoglobin => &self.hemoglobin,
            BiomarkerField::Triglyceride => &self.triglyceride,
            BiomarkerField::TotChole => &self.tot_chole,
        }
    }

    pub fn get_mut(&mut self, field: BiomarkerField) -> &mut String {
        match field {
            BiomarkerField::SerumCreatinine => &mut self.serum_creatinine,
            BiomarkerField::Hemoglobin => &mut self.hemoglobin,
            BiomarkerField::Triglyceride => &mut self.triglyceride,
            BiomarkerField::TotChole => &mut self.tot_chole,
        }
    }

    pub fn set(&mut self, field: BiomarkerField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}

fn parse_field(text: &str) -> Result<f64, ValidationIssue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationIssue::Required);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationIssue::Invalid),
    }
}

/// Validates the whole form in one pass.
///
/// Every field is evaluated even after the first failure so the form can show
/// all inline messages at once. Zero is a valid value. Pure function: no
/// state, identical input yields identical output.
pub fn validate(raw: &RawInput) -> Result<PredictRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut values = [0.0_f64; BiomarkerField::ALL.len()];

    for (slot, field) in values.iter_mut().zip(BiomarkerField::ALL) {
        match parse_field(raw.get(field)) {
            Ok(value) => *slot = value,
            Err(issue) => errors.insert(field, issue),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let [serum_creatinine, hemoglobin, triglyceride, tot_chole] = values;
    Ok(PredictRequest {
        serum_creatinine,
        hemoglobin,
        triglyceride,
        tot_chole,
    })
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
