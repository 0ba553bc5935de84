//! Shared test utilities for controller tests.

#![allow(dead_code)]

mod mock_generator;
mod mock_platform;

pub use mock_generator::MockGenerator;
pub use mock_platform::MockPlatform;

use std::sync::Arc;
use tracerybot_bot::{BotController, SynthesisPolicy, Synthesizer};
use tracerybot_core::{Notification, NotificationBuilder, NotificationId, NotificationKind, StatusId};

/// A mention from `sender` carrying status `s{id}`.
pub fn mention(id: u64, sender: &str) -> Notification {
    NotificationBuilder::default()
        .id(NotificationId(id))
        .kind(NotificationKind::Mention)
        .sender_handle(sender)
        .source_status_id(Some(StatusId(format!("s{}", id))))
        .build()
        .expect("valid mention")
}

/// A non-mention notification of `kind`.
pub fn other(id: u64, kind: NotificationKind) -> Notification {
    NotificationBuilder::default()
        .id(NotificationId(id))
        .kind(kind)
        .sender_handle("someone")
        .build()
        .expect("valid notification")
}

/// A mention with no status attached.
pub fn bare_mention(id: u64, sender: &str) -> Notification {
    NotificationBuilder::default()
        .id(NotificationId(id))
        .kind(NotificationKind::Mention)
        .sender_handle(sender)
        .build()
        .expect("valid mention")
}

/// Controller over the given mocks with the default synthesis policy.
pub fn controller(
    platform: &Arc<MockPlatform>,
    generator: &Arc<MockGenerator>,
    post_interval: u32,
) -> BotController<MockPlatform, MockGenerator> {
    let synthesizer = Synthesizer::new(
        Arc::clone(generator),
        SynthesisPolicy::default(),
        "toot",
        "reply",
    );
    BotController::new(Arc::clone(platform), synthesizer, post_interval)
}
