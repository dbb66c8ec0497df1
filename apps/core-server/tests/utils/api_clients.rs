use std::sync::OnceLock;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use self::employees::EmployeesApi;
use self::organisations::OrganisationsApi;
use self::other::OtherApi;

pub mod employees;
pub mod organisations;
pub mod other;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let request = http_client().request(method, format!("{}{url}", self.base_url));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: Value) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(&body)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_form(&self, url: &str, body: &impl Serialize) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(serde_urlencoded::to_string(body).unwrap())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_raw(&self, url: &str, body: &'static str) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_without_content_type(&self, url: &str, body: &'static str) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .body(body)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn put(&self, url: &str, body: Value) -> Response {
        let resp = self
            .request(reqwest::Method::PUT, url)
            .json(&body)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn put_form(&self, url: &str, body: &impl Serialize) -> Response {
        let resp = self
            .request(reqwest::Method::PUT, url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(serde_urlencoded::to_string(body).unwrap())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn delete(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }
}

pub struct Client {
    pub organisations: OrganisationsApi,
    pub employees: EmployeesApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let client = HttpClient { base_url, token };

        Self {
            organisations: OrganisationsApi::new(client.clone()),
            employees: EmployeesApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
