//! REST route configuration module.
//!
//! Each resource exposes the same five operations under a stable base path.
//! Every route takes the bearer-token extractor, so unauthenticated calls
//! are rejected before controller logic runs.

use super::{appointment, pet};
use ntex::web;

/// Configures pet resource routes.
///
/// # Routes
/// - `POST /api/pets` - Create pet
/// - `GET /api/pets` - List pets
/// - `GET /api/pets/{pet_id}` - Get pet by id
/// - `PUT /api/pets/{pet_id}` - Update pet
/// - `DELETE /api/pets/{pet_id}` - Delete pet
pub fn pets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/pets").service((
        pet::create_pet,
        pet::get_all_pets,
        pet::get_pet_by_id,
        pet::update_pet,
        pet::delete_pet,
    )));
}

/// Configures appointment resource routes.
///
/// # Routes
/// - `POST /api/appointments` - Create appointment
/// - `GET /api/appointments` - List appointments
/// - `GET /api/appointments/{appointment_id}` - Get appointment by id
/// - `PUT /api/appointments/{appointment_id}` - Update appointment
/// - `DELETE /api/appointments/{appointment_id}` - Delete appointment
pub fn appointments(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/appointments").service((
        appointment::create_appointment,
        appointment::get_all_appointments,
        appointment::get_appointment_by_id,
        appointment::update_appointment,
        appointment::delete_appointment,
    )));
}
