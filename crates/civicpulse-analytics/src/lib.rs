//! Derivation pipeline for the CivicPulse dashboard.
//!
//! Takes the flat corpus of collected posts and derives every analytical
//! view the dashboard displays: hashtag trends, topics, breaking news,
//! sentiment/emotion series, influencer rankings, misinformation candidates,
//! scheme impact, media-channel tilt, constituency sentiment, and KPIs.
//!
//! Every deriver is a pure, total, deterministic function of the corpus —
//! no I/O, no wall clock, no randomness. The owning layer recomputes the
//! whole snapshot whenever the corpus is replaced.

pub mod classifier;
pub mod types;

mod breaking;
mod hashtags;
mod influencers;
mod misinfo;
mod rollups;
mod schemes;
mod series;
mod snapshot;
mod topics;

pub use breaking::derive_breaking_news;
pub use classifier::classify;
pub use hashtags::derive_hashtags;
pub use influencers::derive_influencers;
pub use misinfo::derive_misinformation;
pub use rollups::{derive_constituencies, derive_kpis, derive_media_channels};
pub use schemes::derive_schemes;
pub use series::{derive_emotion_series, derive_sentiment_series};
pub use snapshot::derive_snapshot;
pub use topics::derive_topics;
