use crate::model::{Institution, InstitutionType};
use crate::store::traits::Store;
use anyhow::Result;

/// California institutions the transfer workflows assume are present. The
/// `assist_org_id` values are the identifiers Assist.org uses for the same
/// schools, so seeded rows line up with proxy lookups.
fn california_institutions() -> Vec<Institution> {
    vec![
        Institution::new("Sacramento City College", InstitutionType::Ccc, "141", "SCC"),
        Institution::new("UC Davis", InstitutionType::Uc, "76", "UCD"),
        Institution::new("UC Berkeley", InstitutionType::Uc, "77", "UCB"),
        Institution::new("UCLA", InstitutionType::Uc, "78", "UCLA"),
        Institution::new("CSU Sacramento", InstitutionType::Csu, "138", "CSUS"),
        Institution::new(
            "San Francisco State University",
            InstitutionType::Csu,
            "139",
            "SFSU",
        ),
        Institution::new("Cal Poly San Luis Obispo", InstitutionType::Csu, "140", "CPSLO"),
    ]
}

/// Populate the store with the baseline institution list. Runs once at
/// startup; a fresh in-memory store always starts empty, so there is no
/// duplicate check.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    for institution in california_institutions() {
        store.create_institution(institution).await?;
    }
    Ok(())
}
