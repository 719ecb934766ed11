//! In-memory implementation of the repository traits for behavioral tests.
//!
//! Honors the same contracts as the PostgreSQL layer: unique follow edges
//! and engagement marks (duplicate inserts report `false`), set-based
//! follower fan-out, and the ordering rules of every listing. Timestamps
//! are strictly monotonic so ordering assertions are deterministic.
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use faithconnect_repository::{
    ContentRepository, EngagementRepository, FollowRepository, MessageRepository,
    NotificationRepository, RepositoryError, UserRepository,
};
use faithconnect_shared::types::{
    Comment, CommentView, ContentAuthor, ConversationSummary, EngagementCounts,
    FanOutNotification, FollowedLeader, FollowerEntry, LeaderEntry, MarkKind, Message,
    MessageView, NewNotification, NewPost, Notification, NotificationView, Page, Post, PostView,
    ProfileUpdate, ProfileView, Reel, ReelView, Role, TargetKind, TargetRef, UserDisplay, UserId,
    UserProfile,
};
use faithconnect_social::policy::Actor;

struct FollowEdge {
    follower_id: UserId,
    leader_id: UserId,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    users: HashMap<UserId, UserProfile>,
    follows: Vec<FollowEdge>,
    posts: Vec<Post>,
    reels: Vec<Reel>,
    likes: Vec<(UserId, TargetRef)>,
    saves: Vec<(UserId, TargetRef)>,
    comments: Vec<Comment>,
    messages: Vec<Message>,
    notifications: Vec<Notification>,
}

pub struct InMemoryStore {
    state: Mutex<State>,
    base: DateTime<Utc>,
    seq: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            base: Utc::now(),
            seq: AtomicI64::new(0),
        }
    }

    fn next_time(&self) -> DateTime<Utc> {
        let tick = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.base + Duration::milliseconds(tick)
    }

    pub fn seed_user(&self, name: &str, role: Role) -> Actor {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            role,
            full_name: name.to_string(),
            profile_photo: None,
            faith: None,
            bio: None,
            created_at: self.next_time(),
        };
        let actor = Actor {
            id: profile.id,
            role,
        };
        self.state.lock().unwrap().users.insert(profile.id, profile);
        actor
    }

    pub fn seed_worshiper(&self, name: &str) -> Actor {
        self.seed_user(name, Role::Worshiper)
    }

    pub fn seed_leader(&self, name: &str) -> Actor {
        self.seed_user(name, Role::Leader)
    }

    pub fn seed_leader_with_faith(&self, name: &str, faith: &str) -> Actor {
        let actor = self.seed_user(name, Role::Leader);
        let mut state = self.state.lock().unwrap();
        if let Some(profile) = state.users.get_mut(&actor.id) {
            profile.faith = Some(faith.to_string());
        }
        actor
    }

    /// Raw notifications recorded for a user, unordered.
    pub fn notifications_for(&self, user_id: UserId) -> Vec<Notification> {
        self.state
            .lock()
            .unwrap()
            .notifications
            .iter()
            .filter(|n| n.recipient_id == user_id)
            .cloned()
            .collect()
    }

    /// Raw message rows between two users, oldest first.
    pub fn messages_between(&self, a: UserId, b: UserId) -> Vec<Message> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Message> = state
            .messages
            .iter()
            .filter(|m| {
                (m.sender_id == a && m.receiver_id == b)
                    || (m.sender_id == b && m.receiver_id == a)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.created_at);
        rows
    }

    fn display(state: &State, id: UserId) -> UserDisplay {
        let user = state.users.get(&id).expect("display fields for unknown user");
        UserDisplay {
            id,
            name: user.full_name.clone(),
            photo: user.profile_photo.clone(),
        }
    }

    fn author(state: &State, id: UserId) -> ContentAuthor {
        let user = state.users.get(&id).expect("author fields for unknown user");
        ContentAuthor {
            id,
            name: user.full_name.clone(),
            photo: user.profile_photo.clone(),
            role: user.role,
            faith: user.faith.clone(),
        }
    }

    fn engagement_counts(state: &State, target: TargetRef) -> (i64, i64) {
        let likes = state.likes.iter().filter(|(_, t)| *t == target).count() as i64;
        let comments = state.comments.iter().filter(|c| c.target == target).count() as i64;
        (likes, comments)
    }

    fn post_view(state: &State, post: &Post, viewer: Option<UserId>) -> PostView {
        let target = TargetRef::post(post.id);
        let (likes_count, comments_count) = Self::engagement_counts(state, target);
        PostView {
            id: post.id,
            caption: post.caption.clone(),
            media_url: post.media_url.clone(),
            media_type: post.media_type.clone(),
            created_at: post.created_at,
            likes_count,
            comments_count,
            is_liked: viewer
                .map(|v| state.likes.contains(&(v, target)))
                .unwrap_or(false),
            is_saved: viewer
                .map(|v| state.saves.contains(&(v, target)))
                .unwrap_or(false),
            author: Self::author(state, post.author_id),
        }
    }

    fn reel_view(state: &State, reel: &Reel, viewer: Option<UserId>) -> ReelView {
        let target = TargetRef::reel(reel.id);
        let (likes_count, comments_count) = Self::engagement_counts(state, target);
        ReelView {
            id: reel.id,
            caption: reel.caption.clone(),
            video_url: reel.video_url.clone(),
            created_at: reel.created_at,
            likes_count,
            comments_count,
            is_liked: viewer
                .map(|v| state.likes.contains(&(v, target)))
                .unwrap_or(false),
            is_saved: viewer
                .map(|v| state.saves.contains(&(v, target)))
                .unwrap_or(false),
            author: Self::author(state, reel.author_id),
        }
    }

    fn marks<'a>(state: &'a mut State, kind: MarkKind) -> &'a mut Vec<(UserId, TargetRef)> {
        match kind {
            MarkKind::Like => &mut state.likes,
            MarkKind::Save => &mut state.saves,
        }
    }
}

fn paginate<T>(items: Vec<T>, page: Page) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset.max(0) as usize)
        .take(page.limit.max(0) as usize)
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn get_profile(
        &self,
        id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Option<ProfileView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let Some(profile) = state.users.get(&id).cloned() else {
            return Ok(None);
        };
        let followers_count = state.follows.iter().filter(|f| f.leader_id == id).count() as i64;
        let posts_count = state.posts.iter().filter(|p| p.author_id == id).count() as i64;
        let is_following = viewer
            .map(|v| {
                state
                    .follows
                    .iter()
                    .any(|f| f.follower_id == v && f.leader_id == id)
            })
            .unwrap_or(false);
        Ok(Some(ProfileView {
            profile,
            followers_count,
            posts_count,
            is_following,
        }))
    }

    async fn list_leaders(&self, faith: Option<&str>) -> Result<Vec<LeaderEntry>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut leaders: Vec<(LeaderEntry, DateTime<Utc>)> = state
            .users
            .values()
            .filter(|u| u.role == Role::Leader)
            .filter(|u| faith.is_none() || u.faith.as_deref() == faith)
            .map(|u| {
                let followers_count = state
                    .follows
                    .iter()
                    .filter(|f| f.leader_id == u.id)
                    .count() as i64;
                (
                    LeaderEntry {
                        id: u.id,
                        full_name: u.full_name.clone(),
                        role: u.role,
                        faith: u.faith.clone(),
                        bio: u.bio.clone(),
                        profile_photo: u.profile_photo.clone(),
                        followers_count,
                    },
                    u.created_at,
                )
            })
            .collect();
        leaders.sort_by(|(a, at), (b, bt)| {
            b.followers_count
                .cmp(&a.followers_count)
                .then(bt.cmp(at))
        });
        Ok(leaders.into_iter().map(|(entry, _)| entry).collect())
    }

    async fn list_followers(
        &self,
        leader_id: UserId,
    ) -> Result<Vec<FollowerEntry>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut edges: Vec<&FollowEdge> = state
            .follows
            .iter()
            .filter(|f| f.leader_id == leader_id)
            .collect();
        edges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(edges
            .into_iter()
            .map(|edge| {
                let user = state.users.get(&edge.follower_id).expect("follower profile");
                FollowerEntry {
                    id: user.id,
                    full_name: user.full_name.clone(),
                    profile_photo: user.profile_photo.clone(),
                    faith: user.faith.clone(),
                    followed_at: edge.created_at,
                }
            })
            .collect())
    }

    async fn update_profile(
        &self,
        id: UserId,
        changes: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(profile) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(full_name) = &changes.full_name {
            profile.full_name = full_name.clone();
        }
        if let Some(faith) = &changes.faith {
            profile.faith = Some(faith.clone());
        }
        if let Some(bio) = &changes.bio {
            profile.bio = Some(bio.clone());
        }
        if let Some(photo) = &changes.profile_photo {
            profile.profile_photo = Some(photo.clone());
        }
        Ok(Some(profile.clone()))
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn insert(
        &self,
        follower_id: UserId,
        leader_id: UserId,
    ) -> Result<bool, RepositoryError> {
        let created_at = self.next_time();
        let mut state = self.state.lock().unwrap();
        let exists = state
            .follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.leader_id == leader_id);
        if exists {
            return Ok(false);
        }
        state.follows.push(FollowEdge {
            follower_id,
            leader_id,
            created_at,
        });
        Ok(true)
    }

    async fn delete(
        &self,
        follower_id: UserId,
        leader_id: UserId,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.follows.len();
        state
            .follows
            .retain(|f| !(f.follower_id == follower_id && f.leader_id == leader_id));
        Ok(state.follows.len() < before)
    }

    async fn exists(
        &self,
        follower_id: UserId,
        leader_id: UserId,
    ) -> Result<bool, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.leader_id == leader_id))
    }

    async fn list_leaders(
        &self,
        follower_id: UserId,
    ) -> Result<Vec<FollowedLeader>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut edges: Vec<&FollowEdge> = state
            .follows
            .iter()
            .filter(|f| f.follower_id == follower_id)
            .collect();
        edges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(edges
            .into_iter()
            .map(|edge| {
                let leader = state.users.get(&edge.leader_id).expect("leader profile");
                let posts_count = state
                    .posts
                    .iter()
                    .filter(|p| p.author_id == leader.id)
                    .count() as i64;
                FollowedLeader {
                    id: leader.id,
                    full_name: leader.full_name.clone(),
                    profile_photo: leader.profile_photo.clone(),
                    role: leader.role,
                    faith: leader.faith.clone(),
                    bio: leader.bio.clone(),
                    followed_at: edge.created_at,
                    posts_count,
                }
            })
            .collect())
    }
}

#[async_trait]
impl ContentRepository for InMemoryStore {
    async fn insert_post(
        &self,
        author_id: UserId,
        post: &NewPost,
    ) -> Result<Post, RepositoryError> {
        let created_at = self.next_time();
        let stored = Post {
            id: Uuid::new_v4(),
            author_id,
            caption: post.caption.clone(),
            media_url: post.media_url.clone(),
            media_type: post.media_type.clone(),
            created_at,
        };
        self.state.lock().unwrap().posts.push(stored.clone());
        Ok(stored)
    }

    async fn insert_reel(
        &self,
        author_id: UserId,
        caption: Option<&str>,
        video_url: &str,
    ) -> Result<Reel, RepositoryError> {
        let created_at = self.next_time();
        let stored = Reel {
            id: Uuid::new_v4(),
            author_id,
            caption: caption.map(str::to_string),
            video_url: video_url.to_string(),
            created_at,
        };
        self.state.lock().unwrap().reels.push(stored.clone());
        Ok(stored)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.posts.retain(|p| p.id != id);
        Ok(())
    }

    async fn owner_of(&self, target: TargetRef) -> Result<Option<UserId>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(match target.kind {
            TargetKind::Post => state
                .posts
                .iter()
                .find(|p| p.id == target.id)
                .map(|p| p.author_id),
            TargetKind::Reel => state
                .reels
                .iter()
                .find(|r| r.id == target.id)
                .map(|r| r.author_id),
        })
    }

    async fn explore_posts(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<&Post> = state.posts.iter().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(
            posts
                .into_iter()
                .map(|p| Self::post_view(&state, p, viewer))
                .collect(),
            page,
        ))
    }

    async fn following_posts(
        &self,
        follower_id: UserId,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<&Post> = state
            .posts
            .iter()
            .filter(|p| {
                state
                    .follows
                    .iter()
                    .any(|f| f.follower_id == follower_id && f.leader_id == p.author_id)
            })
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(
            posts
                .into_iter()
                .map(|p| Self::post_view(&state, p, Some(follower_id)))
                .collect(),
            page,
        ))
    }

    async fn user_posts(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<PostView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<&Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == user_id)
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(
            posts
                .into_iter()
                .map(|p| Self::post_view(&state, p, viewer))
                .collect(),
            page,
        ))
    }

    async fn list_reels(
        &self,
        viewer: Option<UserId>,
        page: Page,
    ) -> Result<Vec<ReelView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut reels: Vec<&Reel> = state.reels.iter().collect();
        reels.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(
            reels
                .into_iter()
                .map(|r| Self::reel_view(&state, r, viewer))
                .collect(),
            page,
        ))
    }

    async fn user_reels(
        &self,
        user_id: UserId,
        viewer: Option<UserId>,
    ) -> Result<Vec<ReelView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut reels: Vec<&Reel> = state
            .reels
            .iter()
            .filter(|r| r.author_id == user_id)
            .collect();
        reels.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reels
            .into_iter()
            .map(|r| Self::reel_view(&state, r, viewer))
            .collect())
    }
}

#[async_trait]
impl EngagementRepository for InMemoryStore {
    async fn insert_mark(
        &self,
        user_id: UserId,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let marks = Self::marks(&mut state, kind);
        if marks.contains(&(user_id, target)) {
            return Ok(false);
        }
        marks.push((user_id, target));
        Ok(true)
    }

    async fn delete_mark(
        &self,
        user_id: UserId,
        target: TargetRef,
        kind: MarkKind,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let marks = Self::marks(&mut state, kind);
        let before = marks.len();
        marks.retain(|entry| *entry != (user_id, target));
        Ok(marks.len() < before)
    }

    async fn insert_comment(
        &self,
        author_id: UserId,
        target: TargetRef,
        content: &str,
    ) -> Result<Comment, RepositoryError> {
        let created_at = self.next_time();
        let comment = Comment {
            id: Uuid::new_v4(),
            author_id,
            target,
            content: content.to_string(),
            created_at,
        };
        self.state.lock().unwrap().comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(
        &self,
        target: TargetRef,
    ) -> Result<Vec<CommentView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|c| c.target == target)
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments
            .into_iter()
            .map(|c| CommentView {
                id: c.id,
                content: c.content.clone(),
                created_at: c.created_at,
                author: Self::display(&state, c.author_id),
            })
            .collect())
    }

    async fn counts(&self, target: TargetRef) -> Result<EngagementCounts, RepositoryError> {
        let state = self.state.lock().unwrap();
        let (likes, comments) = Self::engagement_counts(&state, target);
        Ok(EngagementCounts { likes, comments })
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn insert(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: &str,
    ) -> Result<Message, RepositoryError> {
        let created_at = self.next_time();
        let message = Message {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            content: content.to_string(),
            is_read: false,
            created_at,
        };
        self.state.lock().unwrap().messages.push(message.clone());
        Ok(message)
    }

    async fn conversations(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ConversationSummary>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut latest: HashMap<UserId, &Message> = HashMap::new();
        for message in &state.messages {
            let counterpart = if message.sender_id == user_id {
                message.receiver_id
            } else if message.receiver_id == user_id {
                message.sender_id
            } else {
                continue;
            };
            let entry = latest.entry(counterpart).or_insert(message);
            if message.created_at > entry.created_at {
                *entry = message;
            }
        }
        let mut summaries: Vec<ConversationSummary> = latest
            .into_iter()
            .map(|(counterpart_id, last)| {
                let unread_count = state
                    .messages
                    .iter()
                    .filter(|m| {
                        m.sender_id == counterpart_id && m.receiver_id == user_id && !m.is_read
                    })
                    .count() as i64;
                let counterpart = state.users.get(&counterpart_id).expect("counterpart");
                ConversationSummary {
                    counterpart: UserDisplay {
                        id: counterpart_id,
                        name: counterpart.full_name.clone(),
                        photo: counterpart.profile_photo.clone(),
                    },
                    counterpart_role: counterpart.role,
                    last_message: last.content.clone(),
                    last_message_time: last.created_at,
                    unread_count,
                }
            })
            .collect();
        summaries.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));
        Ok(summaries)
    }

    async fn thread(
        &self,
        user_id: UserId,
        counterpart_id: UserId,
        page: Page,
    ) -> Result<Vec<MessageView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<&Message> = state
            .messages
            .iter()
            .filter(|m| {
                (m.sender_id == user_id && m.receiver_id == counterpart_id)
                    || (m.sender_id == counterpart_id && m.receiver_id == user_id)
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(
            rows.into_iter()
                .map(|m| MessageView {
                    id: m.id,
                    content: m.content.clone(),
                    is_read: m.is_read,
                    created_at: m.created_at,
                    is_mine: m.sender_id == user_id,
                    sender: Self::display(&state, m.sender_id),
                    receiver: Self::display(&state, m.receiver_id),
                })
                .collect(),
            page,
        ))
    }

    async fn mark_thread_read(
        &self,
        receiver_id: UserId,
        sender_id: UserId,
    ) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let mut transitioned = 0;
        for message in state.messages.iter_mut() {
            if message.receiver_id == receiver_id
                && message.sender_id == sender_id
                && !message.is_read
            {
                message.is_read = true;
                transitioned += 1;
            }
        }
        Ok(transitioned)
    }

    async fn mark_read(&self, id: Uuid, receiver_id: UserId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        for message in state.messages.iter_mut() {
            if message.id == id && message.receiver_id == receiver_id {
                message.is_read = true;
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn insert(&self, notification: &NewNotification) -> Result<(), RepositoryError> {
        let created_at = self.next_time();
        self.state.lock().unwrap().notifications.push(Notification {
            id: Uuid::new_v4(),
            recipient_id: notification.recipient_id,
            kind: notification.kind,
            content: notification.content.clone(),
            related_user_id: notification.related_user_id,
            related_post_id: notification.related_post_id,
            related_reel_id: notification.related_reel_id,
            is_read: false,
            created_at,
        });
        Ok(())
    }

    async fn insert_for_followers(
        &self,
        leader_id: UserId,
        notification: &FanOutNotification,
    ) -> Result<u64, RepositoryError> {
        let created_at = self.next_time();
        let mut state = self.state.lock().unwrap();
        let followers: Vec<UserId> = state
            .follows
            .iter()
            .filter(|f| f.leader_id == leader_id)
            .map(|f| f.follower_id)
            .collect();
        let count = followers.len() as u64;
        for follower_id in followers {
            state.notifications.push(Notification {
                id: Uuid::new_v4(),
                recipient_id: follower_id,
                kind: notification.kind,
                content: notification.content.clone(),
                related_user_id: Some(leader_id),
                related_post_id: notification.related_post_id,
                related_reel_id: notification.related_reel_id,
                is_read: false,
                created_at,
            });
        }
        Ok(count)
    }

    async fn list(
        &self,
        user_id: UserId,
        page: Page,
    ) -> Result<Vec<NotificationView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<&Notification> = state
            .notifications
            .iter()
            .filter(|n| n.recipient_id == user_id)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(
            rows.into_iter()
                .map(|n| NotificationView {
                    id: n.id,
                    kind: n.kind,
                    content: n.content.clone(),
                    is_read: n.is_read,
                    created_at: n.created_at,
                    related_user: n
                        .related_user_id
                        .map(|id| Self::display(&state, id)),
                    related_post_id: n.related_post_id,
                    related_reel_id: n.related_reel_id,
                })
                .collect(),
            page,
        ))
    }

    async fn mark_read(&self, id: Uuid, user_id: UserId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        for notification in state.notifications.iter_mut() {
            if notification.id == id && notification.recipient_id == user_id {
                notification.is_read = true;
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn mark_all_read(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let mut transitioned = 0;
        for notification in state.notifications.iter_mut() {
            if notification.recipient_id == user_id && !notification.is_read {
                notification.is_read = true;
                transitioned += 1;
            }
        }
        Ok(transitioned)
    }

    async fn unread_count(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .notifications
            .iter()
            .filter(|n| n.recipient_id == user_id && !n.is_read)
            .count() as i64)
    }
}
