// Archivo: controller.rs
// Propósito: frontera entre la entrada cruda (JSON + sesión) y los casos de
// uso. Traduce el discriminante del error a una respuesta `Reply` sin
// depender de ningún framework HTTP.
use crate::entities::{CustomerCreationPayload, CustomerId, CustomerUpdatePayload, UserId};
use crate::repository::CustomerRepository;
use crate::schema::Schema;
use crate::usecases::{CustomerCreation, CustomerDeletion, CustomerDeletionCommand, CustomerUpdate, CustomerUpdateCommand};
use log::{debug, error};
use outcome::{BaseError, ErrorKind, ResultExt};
use serde_json::{json, Value as JsonValue};

/// Respuesta de la frontera: código de estado y cuerpo JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: JsonValue,
}

impl Reply {
    pub fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    pub fn no_content() -> Self {
        Self::new(204, JsonValue::Null)
    }

    fn unauthenticated() -> Self {
        Self::new(401, json!({ "message": "Unauthenticated" }))
    }

    fn internal(err: &BaseError) -> Self {
        error!("{}", err.to_json());
        Self::new(ErrorKind::Unexpected.http_status(), json!({ "message": "Internal Server Error" }))
    }
}

/// Controlador de clientes. Recibe el usuario de sesión (si hay) y el
/// cuerpo crudo; devuelve siempre un `Reply`.
pub struct CustomerController<R>
    where R: CustomerRepository
{
    creation: CustomerCreation<R>,
    update: CustomerUpdate<R>,
    deletion: CustomerDeletion<R>,
}

impl<R> CustomerController<R> where R: CustomerRepository
{
    pub fn new(creation: CustomerCreation<R>, update: CustomerUpdate<R>, deletion: CustomerDeletion<R>) -> Self {
        Self { creation,
               update,
               deletion }
    }

    /// `POST /customers`
    pub async fn create(&self, session: Option<&UserId>, body: &JsonValue) -> Reply {
        let Some(user_id) = session else {
            return Reply::unauthenticated();
        };

        let result = CustomerCreationPayload::parse(body).and_then_async(|dto| self.creation.execute(user_id, dto))
                                                         .await;
        match result {
            Ok(customer_id) => Reply::new(200, json!({ "customerId": customer_id })),
            Err(err) => match err.kind() {
                ErrorKind::Parsing => Reply::new(err.kind().http_status(), json!({ "issues": err.context() })),
                ErrorKind::AlreadyExists => Reply::new(err.kind().http_status(),
                                                       json!({ "message": "Customer with same name already exists." })),
                ErrorKind::UnexpectedCollision => {
                    Reply::new(err.kind().http_status(), json!({ "message": "Try again later." }))
                }
                _ => Reply::internal(&err),
            },
        }
    }

    /// `PATCH /customers/:customerId`
    pub async fn update(&self, session: Option<&UserId>, raw_customer_id: &str, body: &JsonValue) -> Reply {
        let Some(user_id) = session else {
            return Reply::unauthenticated();
        };

        let customer_id = match CustomerId::parse(&json!(raw_customer_id)) {
            Ok(id) => id,
            Err(err) => {
                let message = if raw_customer_id.is_empty() {
                    "Missing customerId in URL params"
                } else {
                    "Invalid customerId in URL params"
                };
                return Reply::new(err.kind().http_status(), json!({ "message": message, "issues": err.context() }));
            }
        };
        let payload = match CustomerUpdatePayload::parse(body) {
            Ok(payload) => payload,
            Err(err) => {
                let message = if body.is_null() { "Request Body is required" } else { "Invalid Payload" };
                return Reply::new(err.kind().http_status(), json!({ "message": message, "issues": err.context() }));
            }
        };

        let cmd = CustomerUpdateCommand { user_id: user_id.clone(),
                                          customer_id,
                                          payload };
        match self.update.execute(cmd).await {
            Ok(()) => Reply::no_content(),
            Err(err) => {
                debug!("actualización rechazada: {}", err);
                match err.kind() {
                    ErrorKind::AlreadyExists => Reply::new(err.kind().http_status(), json!({ "message": err.message() })),
                    ErrorKind::NotFound => Reply::new(err.kind().http_status(), json!({ "message": "Resource Not Found" })),
                    _ => Reply::internal(&err),
                }
            }
        }
    }

    /// `DELETE /customers/:customerId`
    pub async fn delete(&self, session: Option<&UserId>, raw_customer_id: &str) -> Reply {
        let Some(user_id) = session else {
            return Reply::unauthenticated();
        };

        let result = CustomerId::parse(&json!(raw_customer_id))
            .map(|customer_id| CustomerDeletionCommand { user_id: user_id.clone(),
                                                         customer_id })
            .and_then_async(|cmd| self.deletion.execute(cmd))
            .await;
        match result {
            Ok(()) => Reply::no_content(),
            Err(err) => match err.kind() {
                ErrorKind::Parsing => Reply::new(err.kind().http_status(), json!({ "issues": err.context() })),
                ErrorKind::NotFound => Reply::new(err.kind().http_status(), json!({ "message": "Resource Not Found" })),
                _ => Reply::internal(&err),
            },
        }
    }
}
