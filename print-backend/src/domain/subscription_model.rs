// src/domain/subscription_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub subscription_type_id: Uuid,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::UserId",
        to = "super::user_model::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::subscription_type_model::Entity",
        from = "Column::SubscriptionTypeId",
        to = "super::subscription_type_model::Column::Id"
    )]
    SubscriptionType,
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::subscription_type_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubscriptionType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
