pub mod appointment;
pub mod errors;
pub mod middleware;
pub mod pet;
pub mod routes;
pub mod utils;

use crate::repo;

pub struct AppState {
    pub repo: repo::ImplAppRepo,
}
