//! smenv - inject AWS Secrets Manager secrets into CI pipeline environments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── inject        # Fetch and export secrets (default)
//! │   └── resolve       # Print resolved secret names
//! ├── core/             # Core library components
//! │   ├── config        # Run configuration from step inputs
//! │   ├── matcher       # `*` wildcard matching
//! │   ├── lister        # Paginated store listing
//! │   ├── resolver      # Patterns to secret names
//! │   ├── normalize     # Secret value to variables
//! │   ├── posix         # Shell-safe variable names
//! │   ├── publish       # Mask and export variables
//! │   ├── store/        # Secret stores
//! │   │   ├── aws       # AWS Secrets Manager
//! │   │   └── memory    # In-memory store
//! │   └── platform/     # CI platforms
//! │       ├── github    # GitHub Actions workflow commands
//! │       └── recording # In-memory recorder
//! └── runner            # The fetch and publish pipeline
//! ```
//!
//! # Example
//!
//! ```ignore
//! let config = Config::from_inputs("prod/*,shared/api_key", AwsSettings::default())?;
//! let store = AwsSecretsManager::connect(&config.aws).await;
//! let platform = GitHubActions::from_env();
//! smenv::runner::run(&config, &store, &platform).await?;
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod runner;
