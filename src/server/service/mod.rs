//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls and shaping page results
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Access Rules**: Enforcing ownership and visibility before any write
//!
//! Services are generic over the storage traits from the data layer, so tests can
//! substitute an in-memory store while the application runs on the SeaORM-backed
//! repositories.

pub mod bookmark;
pub mod comment;
pub mod reply;
