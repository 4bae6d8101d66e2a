pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity feed.
    pub const MAX_ACTIVITY_FEED: usize = 100;

    /// Maximum event buffer size for feed worker channels
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // MOCK LATENCY CONFIGURATION
    // =============================================================================
    // The application has no backend; every "network" call is a timed
    // delay matching the latencies the product simulates.

    /// Simulated latencies for mock asynchronous operations
    pub mod mock_latency {
        use std::time::Duration;

        /// Delay applied to the sign-in round trip (milliseconds)
        pub const AUTH_DELAY_MS: u64 = 1_500;

        /// Delay applied to report generation (milliseconds)
        pub const REPORT_DELAY_MS: u64 = 2_000;

        /// Delay before the assistant "responds" (milliseconds)
        pub const ASSISTANT_DELAY_MS: u64 = 800;

        pub const fn auth_delay() -> Duration {
            Duration::from_millis(AUTH_DELAY_MS)
        }

        pub const fn report_delay() -> Duration {
            Duration::from_millis(REPORT_DELAY_MS)
        }

        pub const fn assistant_delay() -> Duration {
            Duration::from_millis(ASSISTANT_DELAY_MS)
        }
    }

    /// Feed worker pacing
    pub mod feed {
        use std::time::Duration;

        /// Base interval between commit feed events (milliseconds)
        pub const COMMIT_INTERVAL_MS: u64 = 6_000;

        /// Base interval between pull request feed events (milliseconds)
        pub const PULL_REQUEST_INTERVAL_MS: u64 = 9_000;

        /// Base interval between ticket feed events (milliseconds)
        pub const TICKET_INTERVAL_MS: u64 = 12_000;

        /// Maximum random jitter added to each interval (milliseconds)
        pub const JITTER_MS: u64 = 2_500;

        pub const fn commit_interval() -> Duration {
            Duration::from_millis(COMMIT_INTERVAL_MS)
        }

        pub const fn pull_request_interval() -> Duration {
            Duration::from_millis(PULL_REQUEST_INTERVAL_MS)
        }

        pub const fn ticket_interval() -> Duration {
            Duration::from_millis(TICKET_INTERVAL_MS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up before advancing (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2_000;

    /// UI event poll interval (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 100;
}
