//! HTTP services: the donation API under `/api` and the static frontend
//! files served for every other path.

pub mod donations;
pub mod static_files;
