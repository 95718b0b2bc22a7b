//! Types shared by the revenue dashboard: closed filter vocabularies,
//! chart DTOs and input errors. Nothing in here touches the DOM.

pub mod dashboards;
pub mod enums;
