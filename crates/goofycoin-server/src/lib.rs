//! HTTP transport for the goofycoin ledger.
//!
//! Routes:
//!
//! | method | path                 | body / response                                   |
//! |--------|----------------------|---------------------------------------------------|
//! | GET    | `/`, `/dashboard`    | static pages                                      |
//! | GET    | `/js/*`, `/css/*`    | static assets                                     |
//! | POST   | `/api/user`          | `{ userName }` → 200, empty body                  |
//! | GET    | `/api/user`          | `[{ id, name }]` in creation order                |
//! | POST   | `/api/mint`          | `{ userId, amount }` → record                     |
//! | POST   | `/api/transfer`      | `{ senderId, receiverId, amount }` → record       |
//! | GET    | `/api/ledger`        | `[{ timestamp, payload, previousHash, currentHash }]` |
//! | GET    | `/api/ledger/verify` | `{ valid, length, error? }`                       |
//! | GET    | `/health`            | `{ status, identities, transactions }`            |

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use api::{create_router, RecordView};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::GoofycoinServer;
pub use state::AppState;
