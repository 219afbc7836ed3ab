use crate::client::{Client, RequestSpec};
use crate::error::MonoError;
use crate::models::{
    IdentityResponse, IncomeResponse, InformationResponse, Institution, InstitutionsResponse,
    StatementData, StatementJob, StatementOutput, StatementResponse, TokenExchange,
    TransactionsByType, TransactionsResponse,
};
use crate::payload::encode_payload;
use log::debug;
use std::collections::BTreeMap;

fn require(value: &str, message: &'static str) -> Result<(), MonoError> {
    if value.is_empty() {
        return Err(MonoError::InvalidParameter(message));
    }
    Ok(())
}

impl Client {
    /// Exchange the code returned by Mono Connect for an account id.
    pub async fn exchange_token(&self, code: &str) -> Result<String, MonoError> {
        require(code, "code cannot be blank")?;
        let payload = encode_payload(&BTreeMap::from([("code", code)]))?;
        let url = self.endpoint(&["account", "auth"])?;
        let exchange: TokenExchange = self
            .execute(RequestSpec::post(url).with_body(payload))
            .await?;
        Ok(exchange.id)
    }

    /// Fetch details of a linked account.
    pub async fn information(&self, id: &str) -> Result<InformationResponse, MonoError> {
        require(id, "id is required")?;
        let url = self.endpoint(&["accounts", id])?;
        self.execute(RequestSpec::post(url)).await
    }

    /// Fetch an account statement, leniently parsing `output`.
    ///
    /// An empty `output` selects no format: nothing is sent and `None` is
    /// returned. Anything other than `json` or `pdf` (in any case) is rejected.
    pub async fn statement(
        &self,
        id: &str,
        period: &str,
        output: &str,
    ) -> Result<Option<StatementResponse>, MonoError> {
        require(id, "id is required")?;
        if output.is_empty() {
            debug!("No statement output requested for account {}", id);
            return Ok(None);
        }
        let output: StatementOutput = output.parse()?;
        self.statement_with_output(id, period, output)
            .await
            .map(Some)
    }

    /// Fetch an account statement in the given format.
    ///
    /// JSON statements are returned inline; PDF statements start a build job
    /// whose progress can be polled with [`Client::pdf_statement_job_status`].
    pub async fn statement_with_output(
        &self,
        id: &str,
        period: &str,
        output: StatementOutput,
    ) -> Result<StatementResponse, MonoError> {
        require(id, "id is required")?;
        let mut url = self.endpoint(&["accounts", id, "statement"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("output", output.as_str());
            if !period.is_empty() {
                query.append_pair("period", period);
            }
        }

        match output {
            StatementOutput::Pdf => {
                let job: StatementJob = self.execute(RequestSpec::get(url)).await?;
                Ok(StatementResponse::Pdf(job))
            }
            StatementOutput::Json => {
                let data: StatementData = self.execute(RequestSpec::post(url)).await?;
                debug!("Decoded {} statement rows", data.data.len());
                Ok(StatementResponse::Json(data))
            }
        }
    }

    /// Poll the status of a PDF statement build.
    pub async fn pdf_statement_job_status(
        &self,
        id: &str,
        job_id: &str,
    ) -> Result<StatementJob, MonoError> {
        require(id, "id is required")?;
        require(job_id, "job_id is required")?;
        let url = self.endpoint(&["accounts", id, "statement", "jobs", job_id])?;
        self.execute(RequestSpec::get(url)).await
    }

    /// List account transactions. Empty filters are left out of the query.
    pub async fn transactions(
        &self,
        id: &str,
        start: &str,
        end: &str,
        narration: &str,
        transaction_type: &str,
        paginate: bool,
    ) -> Result<TransactionsResponse, MonoError> {
        require(id, "id is required")?;
        let mut url = self.endpoint(&["accounts", id, "transactions"])?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in [
                ("start", start),
                ("end", end),
                ("narration", narration),
                ("type", transaction_type),
            ] {
                if !value.is_empty() {
                    query.append_pair(key, value);
                }
            }
            query.append_pair("paginate", if paginate { "true" } else { "false" });
        }

        let response: TransactionsResponse = self.execute(RequestSpec::get(url)).await?;
        debug!(
            "Decoded {} transactions (page {} of {} total)",
            response.data.len(),
            response.paging.page,
            response.paging.total
        );
        Ok(response)
    }

    pub async fn credit_transactions(&self, id: &str) -> Result<TransactionsByType, MonoError> {
        self.transactions_by_type(id, "credit").await
    }

    pub async fn debit_transactions(&self, id: &str) -> Result<TransactionsByType, MonoError> {
        self.transactions_by_type(id, "debit").await
    }

    async fn transactions_by_type(
        &self,
        id: &str,
        kind: &str,
    ) -> Result<TransactionsByType, MonoError> {
        require(id, "id is required")?;
        let url = self.endpoint(&["accounts", id, kind])?;
        self.execute(RequestSpec::get(url)).await
    }

    pub async fn income(&self, id: &str) -> Result<IncomeResponse, MonoError> {
        require(id, "id is required")?;
        let url = self.endpoint(&["accounts", id, "income"])?;
        self.execute(RequestSpec::get(url)).await
    }

    /// Fetch the identity of the account holder.
    pub async fn identity(&self, id: &str) -> Result<IdentityResponse, MonoError> {
        require(id, "id is required")?;
        let url = self.endpoint(&["accounts", id, "identity"])?;
        self.execute(RequestSpec::get(url)).await
    }

    /// List the institutions Mono covers.
    pub async fn institutions(&self) -> Result<InstitutionsResponse, MonoError> {
        let url = self.endpoint(&["coverage"])?;
        let institutions: Vec<Institution> = self.execute(RequestSpec::get(url)).await?;
        debug!("Decoded {} institutions", institutions.len());
        Ok(InstitutionsResponse { institutions })
    }

    /// Look up the identity behind a bank verification number.
    pub async fn lookup_bvn(&self, bvn: &str) -> Result<IdentityResponse, MonoError> {
        require(bvn, "bvn is required")?;
        let payload = encode_payload(&BTreeMap::from([("bvn", bvn)]))?;
        let url = self.endpoint(&["v1", "lookup", "bvn", "identity"])?;
        self.execute(RequestSpec::post(url).with_body(payload))
            .await
    }
}
