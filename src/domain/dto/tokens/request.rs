use serde::Serialize;

/// IMS authorization code 교환 요청 DTO (`application/x-www-form-urlencoded`)
#[derive(Serialize)]
pub struct ImsTokenRequest<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
}

impl<'a> ImsTokenRequest<'a> {
    pub fn authorization_code(client_id: &'a str, client_secret: &'a str, code: &'a str) -> Self {
        Self {
            grant_type: "authorization_code",
            client_id,
            client_secret,
            code,
        }
    }
}
