use crate::server::{
    model::school::{SchoolCandidate, SchoolChanges},
    service::validation::{require_present, FieldErrors},
};

pub fn validate(candidate: &SchoolCandidate) -> Result<SchoolChanges, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = require_present(&mut errors, "name", candidate.name.clone());
    let address = require_present(&mut errors, "address", candidate.address.clone());

    match (name, address) {
        (Some(name), Some(address)) => Ok(SchoolChanges { name, address }),
        _ => Err(errors),
    }
}
