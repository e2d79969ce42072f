// Command-line interface.
// `serve` runs the site, `refresh-github-projects` warms the project cache.

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Personal portfolio site")]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the portfolio site.
    Serve {
        #[arg(long, env = "PORTFOLIO_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "PORTFOLIO_PORT", default_value_t = 8000)]
        port: u16,
    },

    /// Refresh and warm the cached GitHub project list.
    RefreshGithubProjects {
        /// Number of public repositories to cache.
        #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
        limit: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_default_limit() {
        let cli = Cli::try_parse_from(["portfolio", "refresh-github-projects"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::RefreshGithubProjects { limit: 6 }
        ));
    }

    #[test]
    fn test_refresh_accepts_negative_limit() {
        let cli =
            Cli::try_parse_from(["portfolio", "refresh-github-projects", "--limit", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::RefreshGithubProjects { limit: -2 }
        ));
    }

    #[test]
    fn test_global_settings_after_subcommand() {
        let cli = Cli::try_parse_from([
            "portfolio",
            "serve",
            "--port",
            "9000",
            "--cache-backend",
            "memory",
            "--github-username",
            "octocat",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Serve { port: 9000, .. }));
        assert_eq!(cli.settings.cache_backend, crate::config::CacheBackendKind::Memory);
        assert_eq!(cli.settings.github_username, "octocat");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["portfolio"]).is_err());
    }
}
