/*
 * Copyright 2019 Ben Ashford
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Cancellation and deadlines for individual requests
//!
//! A `Context` is attached to every `Request`.  The client refuses to hand a
//! cancelled or expired request to the transport, and the HTTP transport
//! turns any remaining time into a per-request timeout.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use rs_esapi::context::Context;
//!
//! let (ctx, handle) = Context::cancellable();
//! let ctx = ctx.with_timeout(Duration::from_secs(5));
//! assert!(!ctx.is_cancelled());
//!
//! handle.cancel();
//! assert!(ctx.is_cancelled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::EsError;

#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Context {
        Context::default()
    }

    /// A context paired with the handle that cancels it
    pub fn cancellable() -> (Context, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        let ctx = Context {
            cancelled: Some(flag.clone()),
            deadline: None,
        };
        (ctx, CancelHandle(flag))
    }

    /// Sets a deadline `timeout` from now.  An earlier existing deadline wins.
    pub fn with_timeout(self, timeout: Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline.  An earlier existing deadline wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Context {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
            .as_ref()
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Fails if the context has been cancelled or its deadline has passed
    pub fn check(&self) -> Result<(), EsError> {
        if self.is_cancelled() {
            return Err(EsError::Cancelled);
        }
        match self.remaining() {
            Some(remaining) if remaining == Duration::from_secs(0) => {
                Err(EsError::DeadlineExceeded)
            }
            _ => Ok(()),
        }
    }
}

/// Cancels every clone of the `Context` it was created with
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
pub mod tests {
    use std::time::{Duration, Instant};

    use super::Context;
    use crate::error::EsError;

    #[test]
    fn test_background_never_fails() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
        assert!(ctx.check().is_ok());
    }

    #[test]
    fn test_cancel_reaches_clones() {
        let (ctx, handle) = Context::cancellable();
        let cloned = ctx.clone();
        handle.cancel();
        assert!(ctx.is_cancelled());
        match cloned.check() {
            Err(EsError::Cancelled) => (),
            other => panic!("expected cancellation, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_deadline() {
        let ctx = Context::background().with_deadline(Instant::now());
        match ctx.check() {
            Err(EsError::DeadlineExceeded) => (),
            other => panic!("expected deadline exceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_earlier_deadline_wins() {
        let ctx = Context::background()
            .with_timeout(Duration::from_secs(5))
            .with_timeout(Duration::from_secs(3600));
        let remaining = ctx.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(5));
        assert!(ctx.check().is_ok());
    }
}
