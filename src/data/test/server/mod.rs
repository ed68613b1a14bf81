use crate::{
    data::server::ServerRepository,
    model::{
        server::{ListServersParam, MemberCountRange, PartnerFilter, ServerSort},
        sync::SyncedServerInfo,
    },
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_id;
mod list_paginated;
mod set_partner;
mod update_synced_info;
