use crate::{model::trend::LevelProjection, service::trend::TrendService};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_progress;
