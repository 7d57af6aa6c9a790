use anyhow::Result;
use serde::Deserialize;

/// Query parameters passed through to the Assist.org agreements endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementQuery {
    pub receiving_institution_id: Option<String>,
    pub sending_institution_id: Option<String>,
    pub academic_year_id: Option<String>,
    pub category_code: Option<String>,
}

/// Thin client for the external Assist.org articulation API. Calls are
/// best-effort: no retries, no caching; failures bubble up to the proxy
/// handlers as-is.
#[derive(Debug, Clone)]
pub struct AssistClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssistClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn institution_agreements(&self, institution_id: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}/institutions/{}/agreements",
            self.base_url, institution_id
        );
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn agreements(&self, query: &AgreementQuery) -> Result<serde_json::Value> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(v) = &query.receiving_institution_id {
            params.push(("receivingInstitutionId", v));
        }
        if let Some(v) = &query.sending_institution_id {
            params.push(("sendingInstitutionId", v));
        }
        if let Some(v) = &query.academic_year_id {
            params.push(("academicYearId", v));
        }
        if let Some(v) = &query.category_code {
            params.push(("categoryCode", v));
        }

        let url = format!("{}/agreements", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
