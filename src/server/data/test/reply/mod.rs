use crate::server::{
    data::reply::{ReplyRepository, ReplyStore},
    model::reply::CreateReplyParam,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_cascading;
mod list_after;
