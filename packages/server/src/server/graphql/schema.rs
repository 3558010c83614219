//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};

use super::context::GraphQLContext;

// Common types
use crate::common::RoomId;

// Domain actions
use crate::domains::analytics::actions as analytics_actions;
use crate::domains::chat::actions as chat_actions;
use crate::domains::rooms::actions as room_actions;

// Domain data types (GraphQL types)
use crate::domains::analytics::data::ParticipantScoreData;
use crate::domains::chat::data::MessageData;
use crate::domains::member::data::MemberData;
use crate::domains::rooms::data::RoomData;

// Domain models (for queries)
use crate::domains::chat::models::MessageWithAuthor;
use crate::domains::member::models::Member;
use crate::domains::rooms::models::Room;

// =============================================================================
// Helper functions
// =============================================================================

/// Convert anyhow::Error to juniper FieldError for thin resolvers
fn to_field_error(e: anyhow::Error) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

/// Parse a GraphQL id argument into a typed RoomId
fn parse_room_id(id: &str) -> FieldResult<RoomId> {
    RoomId::parse(id)
        .map_err(|e| FieldError::new(format!("Invalid room ID: {}", e), juniper::Value::null()))
}

/// Fetch a room and attach its creator's display name
async fn room_with_creator(room: Room, ctx: &GraphQLContext) -> FieldResult<RoomData> {
    let creator = Member::find_by_id(room.created_by, &ctx.db_pool)
        .await
        .map_err(to_field_error)?;

    Ok(RoomData::from_room(room, creator.and_then(|m| m.name)))
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Room Queries
    // =========================================================================

    /// Get a room by ID, with its creator's display name
    async fn room(ctx: &GraphQLContext, id: String) -> FieldResult<Option<RoomData>> {
        let room_id = parse_room_id(&id)?;

        match Room::find_by_id(room_id, &ctx.db_pool).await {
            Ok(Some(room)) => Ok(Some(room_with_creator(room, ctx).await?)),
            Ok(None) => Ok(None),
            Err(e) => Err(to_field_error(e)),
        }
    }

    /// Get rooms created by the authenticated member, newest first
    async fn my_rooms(ctx: &GraphQLContext) -> FieldResult<Vec<RoomData>> {
        let user = ctx.require_auth()?;

        let rooms = Room::find_by_creator(user.member_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        let creator_name = user.name.clone();
        Ok(rooms
            .into_iter()
            .map(|room| RoomData::from_room(room, creator_name.clone()))
            .collect())
    }

    // =========================================================================
    // Chat Queries
    // =========================================================================

    /// Get messages for a room in send order
    async fn messages(ctx: &GraphQLContext, room_id: String) -> FieldResult<Vec<MessageData>> {
        let room_id = parse_room_id(&room_id)?;

        let messages = MessageWithAuthor::find_by_room(room_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(messages.into_iter().map(MessageData::from).collect())
    }

    /// Get members who have sent at least one message in a room
    async fn room_participants(
        ctx: &GraphQLContext,
        room_id: String,
    ) -> FieldResult<Vec<MemberData>> {
        let room_id = parse_room_id(&room_id)?;

        let members = Member::find_participants(room_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(members.into_iter().map(MemberData::from).collect())
    }

    // =========================================================================
    // Analytics Queries
    // =========================================================================

    /// Get the participation report for a room.
    ///
    /// One entry per student who sent at least one message. An unknown room
    /// yields an empty report rather than an error.
    async fn participant_scores(
        ctx: &GraphQLContext,
        room_id: String,
    ) -> FieldResult<Vec<ParticipantScoreData>> {
        let room_id = parse_room_id(&room_id)?;

        analytics_actions::room_participant_scores(room_id, &ctx.db_pool)
            .await
            .map_err(to_field_error)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Room Mutations
    // =========================================================================

    /// Create a room (authenticated; the caller becomes the teacher)
    async fn create_room(
        ctx: &GraphQLContext,
        name: String,
        description: Option<String>,
    ) -> FieldResult<RoomData> {
        let user = ctx.require_auth()?;

        let room = room_actions::create_room(name, description, user, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(RoomData::from_room(room, user.name.clone()))
    }

    /// End a room (authenticated; only the creator may end their room)
    async fn end_room(ctx: &GraphQLContext, room_id: String) -> FieldResult<RoomData> {
        let user = ctx.require_auth()?;
        let room_id = parse_room_id(&room_id)?;

        let room = room_actions::end_room(room_id, user, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(RoomData::from_room(room, user.name.clone()))
    }

    // =========================================================================
    // Chat Mutations
    // =========================================================================

    /// Send a message to an active room (authenticated)
    async fn send_message(
        ctx: &GraphQLContext,
        room_id: String,
        content: String,
    ) -> FieldResult<MessageData> {
        let user = ctx.require_auth()?;
        let room_id = parse_room_id(&room_id)?;

        let message = chat_actions::send_message(room_id, content, user, &ctx.db_pool)
            .await
            .map_err(to_field_error)?;

        Ok(MessageData::from(message))
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
