//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{handle_wall_contacts, probe_contacts};
pub(crate) use input::{queue_actions, read_input};
pub(crate) use movement::{integrate_motion, update_timers};
