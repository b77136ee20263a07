//! MySQL-backed implementation of the `ContactRepository` port.
//!
//! Both lookups run on one pooled connection that is returned to the pool
//! when the call ends, on success and on error alike. Text columns are cast
//! to `CHAR` so ISX's mixed integer and varchar keys decode as strings.

use async_trait::async_trait;
use contactsync_core::ContactRepository;
use contactsync_domain::constants::CANCELED_SUBSCRIPTION_STATUS;
use contactsync_domain::{
    ContactRecords, ContactSyncError, CustomerRecord, Result as DomainResult, SubscriptionRecord,
};
use sqlx::mysql::MySqlPool;
use sqlx::{FromRow, MySql, QueryBuilder};
use tracing::{debug, instrument, warn};

use crate::errors::InfraError;

const CUSTOMER_QUERY: &str = "SELECT CAST(CustId AS CHAR) AS customer_id, \
     CAST(CustCompany AS CHAR) AS company, \
     CAST(IFNULL(DisplayBranchId, BranchId) AS CHAR) AS branch \
     FROM Customer \
     WHERE CustId IN (";

const SUBSCRIPTION_QUERY: &str = "SELECT CAST(cs.CustServId AS CHAR) AS subscription_id, \
     CAST(s.ServiceType AS CHAR) AS service, \
     CAST(cs.CustAccName AS CHAR) AS account, \
     CAST(IFNULL(cs.installation_address, '') AS CHAR) AS address \
     FROM CustomerServices cs \
     LEFT JOIN Services s ON cs.ServiceId = s.ServiceId \
     WHERE cs.CustId IN (";

#[derive(Debug, FromRow)]
struct CustomerRow {
    customer_id: String,
    company: Option<String>,
    branch: Option<String>,
}

impl From<CustomerRow> for CustomerRecord {
    fn from(row: CustomerRow) -> Self {
        Self { customer_id: row.customer_id, company: row.company, branch: row.branch }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    subscription_id: String,
    service: Option<String>,
    account: Option<String>,
    address: Option<String>,
}

impl From<SubscriptionRow> for SubscriptionRecord {
    fn from(row: SubscriptionRow) -> Self {
        Self {
            subscription_id: row.subscription_id,
            service: row.service,
            account: row.account,
            address: row.address,
        }
    }
}

/// Reads customers and their live subscriptions from the ISX schema.
#[derive(Clone)]
pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    /// Repository reading through `pool`.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    #[instrument(skip_all, fields(customer_count = customer_ids.len()))]
    async fn fetch_contact_records(&self, customer_ids: &[String]) -> DomainResult<ContactRecords> {
        if customer_ids.is_empty() {
            return Ok(ContactRecords::default());
        }

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|err| map_sql_error("contact.acquire", err))?;

        let mut customer_query = in_list_query(CUSTOMER_QUERY, customer_ids);
        customer_query.push(")");

        let customers: Vec<CustomerRecord> = customer_query
            .build_query_as::<CustomerRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| map_sql_error("contact.customers.query", err))?
            .into_iter()
            .map(CustomerRecord::from)
            .collect();

        if customers.is_empty() {
            debug!("no customer rows matched");
            return Ok(ContactRecords::default());
        }

        let mut subscription_query = in_list_query(SUBSCRIPTION_QUERY, customer_ids);
        subscription_query.push(") AND cs.CustStatus != ").push_bind(CANCELED_SUBSCRIPTION_STATUS);

        let subscriptions: Vec<SubscriptionRecord> = subscription_query
            .build_query_as::<SubscriptionRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| map_sql_error("contact.subscriptions.query", err))?
            .into_iter()
            .map(SubscriptionRecord::from)
            .collect();

        debug!(
            customers = customers.len(),
            subscriptions = subscriptions.len(),
            "contact records fetched"
        );

        Ok(ContactRecords { customers, subscriptions })
    }
}

/// `prefix` followed by one bound placeholder per id, separated by commas.
fn in_list_query<'args>(prefix: &str, ids: &[String]) -> QueryBuilder<'args, MySql> {
    let mut builder = QueryBuilder::new(prefix);
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(id.clone());
    }
    builder
}

fn map_sql_error(context: &'static str, err: sqlx::Error) -> ContactSyncError {
    let mapped: ContactSyncError = InfraError::from(err).into();
    warn!(context, error = %mapped, "contact datastore failure");
    mapped
}
