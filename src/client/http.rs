//! HTTP implementation of [`BudgetClient`]
//!
//! Talks to an HTTP bridge in front of the Actual Budget server, laid out
//! like the `actual-http-api` project: every budget route lives under
//! `/v1/budgets/{sync_id}`, successful responses wrap their payload as
//! `{"data": ...}`, and failures carry `{"error": "..."}`.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{BudgetClient, ConnectOptions};
use crate::error::{ActualError, ActualResult};
use crate::models::{
    Account, Amount, BudgetMonth, Category, CategoryGroup, ImportOutcome, NewTransaction, Payee,
    Transaction,
};

const API_KEY_HEADER: &str = "x-api-key";
const ENCRYPTION_PASSWORD_HEADER: &str = "budget-encryption-password";

#[derive(Clone)]
struct Connection {
    server_url: String,
    password: String,
}

#[derive(Clone)]
struct OpenBudget {
    sync_id: String,
    encryption_password: Option<String>,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

#[derive(Serialize)]
struct TransactionsBody<'a> {
    transactions: &'a [NewTransaction],
}

/// Budget client backed by HTTP requests
#[derive(Default)]
pub struct HttpBudgetClient {
    http: reqwest::Client,
    connection: Option<Connection>,
    budget: Option<OpenBudget>,
}

impl HttpBudgetClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn connection(&self) -> ActualResult<&Connection> {
        self.connection
            .as_ref()
            .ok_or_else(|| ActualError::Service("Client is not initialized".into()))
    }

    fn budget(&self) -> ActualResult<&OpenBudget> {
        self.budget
            .as_ref()
            .ok_or_else(|| ActualError::Service("No budget file is open".into()))
    }

    /// Build a request against the open budget's base path
    fn request(&self, method: Method, path: &str) -> ActualResult<RequestBuilder> {
        let connection = self.connection()?;
        let budget = self.budget()?;
        let url = budget_url(&connection.server_url, &budget.sync_id, path);

        tracing::debug!(%method, %url, "request");
        let mut request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &connection.password);
        if let Some(password) = &budget.encryption_password {
            request = request.header(ENCRYPTION_PASSWORD_HEADER, password);
        }
        Ok(request)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ActualResult<T> {
        let response = self.request(Method::GET, path)?.send().await?;
        read_data(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ActualResult<T> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        read_data(response).await
    }
}

/// `{server}/v1/budgets/{sync_id}{path}`, tolerating a trailing slash on the server URL
fn budget_url(server_url: &str, sync_id: &str, path: &str) -> String {
    format!(
        "{}/v1/budgets/{}{}",
        server_url.trim_end_matches('/'),
        sync_id,
        path
    )
}

/// Unwrap a `{"data": ...}` response or surface the server's error
async fn read_data<T: DeserializeOwned>(response: Response) -> ActualResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("Server responded with {}: {}", status, body.trim()));
        return Err(ActualError::Service(message));
    }

    let envelope: DataEnvelope<T> = serde_json::from_str(&body)
        .map_err(|e| ActualError::Service(format!("Unexpected response from server: {}", e)))?;
    Ok(envelope.data)
}

impl BudgetClient for HttpBudgetClient {
    async fn init(&mut self, options: &ConnectOptions) -> ActualResult<()> {
        self.connection = Some(Connection {
            server_url: options.server_url.clone(),
            password: options.password.clone(),
        });
        Ok(())
    }

    async fn download_budget(
        &mut self,
        sync_id: &str,
        encryption_password: Option<&str>,
    ) -> ActualResult<()> {
        self.budget = Some(OpenBudget {
            sync_id: sync_id.to_string(),
            encryption_password: encryption_password.map(str::to_string),
        });

        let _: serde_json::Value = self.post("/download", &serde_json::json!({})).await?;
        Ok(())
    }

    async fn shutdown(&mut self) -> ActualResult<()> {
        self.budget = None;
        self.connection = None;
        Ok(())
    }

    async fn get_accounts(&self) -> ActualResult<Vec<Account>> {
        self.get("/accounts").await
    }

    async fn get_account_balance(&self, account_id: &str) -> ActualResult<Amount> {
        self.get(&format!("/accounts/{}/balance", account_id)).await
    }

    async fn get_categories(&self) -> ActualResult<Vec<Category>> {
        self.get("/categories").await
    }

    async fn get_category_groups(&self) -> ActualResult<Vec<CategoryGroup>> {
        self.get("/categorygroups").await
    }

    async fn get_payees(&self) -> ActualResult<Vec<Payee>> {
        self.get("/payees").await
    }

    async fn get_transactions(
        &self,
        account_id: &str,
        from: &str,
        to: &str,
    ) -> ActualResult<Vec<Transaction>> {
        let response = self
            .request(Method::GET, &format!("/accounts/{}/transactions", account_id))?
            .query(&[("since_date", from), ("until_date", to)])
            .send()
            .await?;
        read_data(response).await
    }

    async fn get_budget_month(&self, month: &str) -> ActualResult<BudgetMonth> {
        self.get(&format!("/months/{}", month)).await
    }

    async fn add_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> ActualResult<Vec<String>> {
        self.post(
            &format!("/accounts/{}/transactions/batch", account_id),
            &TransactionsBody { transactions },
        )
        .await
    }

    async fn import_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> ActualResult<ImportOutcome> {
        self.post(
            &format!("/accounts/{}/transactions/import", account_id),
            &TransactionsBody { transactions },
        )
        .await
    }

    async fn sync(&self) -> ActualResult<()> {
        let _: serde_json::Value = self.post("/sync", &serde_json::json!({})).await?;
        tracing::debug!("synced");
        Ok(())
    }
}
