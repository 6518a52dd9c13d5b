//! API routes
//!
//! | Module | Prefix | Access |
//! |--------|--------|--------|
//! | [`health`] | /health | public |
//! | [`auth`] | /api/auth | login public, me authenticated |
//! | [`slots`] | /api/slots | slots:read / slots:book / slots:manage |
//! | [`queue`] | /api/queue | queue:read / queue:manage |
//! | [`checkin`] | /api/checkin | checkin:manage |
//! | [`sos`] | /api/sos | sos:create / sos:manage |
//! | [`prasad`] | /api/prasad-timings | GET public, PUT temple:manage |
//! | [`parking`] | /api/parking | GET public, PUT temple:manage |
//! | [`puja`] | /api/virtual-puja | pandits public, puja:book / puja:manage |
//! | [`schedule`] | /api/schedule | GET public, writes temple:manage |
//! | [`crowd`] | /api/crowd | temple:read / temple:manage |
//! | [`dashboard`] | /api/dashboard | dashboard:view |
//! | [`donations`] | /api/donations | donations:create / donations:view |
//! | [`volunteers`] | /api/volunteers | volunteers:register / volunteers:view |
//! | [`chat`] | /api/chat | chat:use |

pub mod auth;
pub mod chat;
pub mod checkin;
pub mod crowd;
pub mod dashboard;
pub mod donations;
pub mod health;
pub mod parking;
pub mod prasad;
pub mod puja;
pub mod queue;
pub mod schedule;
pub mod slots;
pub mod sos;
pub mod volunteers;

pub use crate::utils::{AppError, AppResult};

#[cfg(test)]
pub(crate) mod test_support;
