//! Error codes for the game backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the game backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that
/// appears in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Word field missing or empty
    EmptyWord,
    /// Slide length must be a positive measurement
    InvalidSlideLength,
    /// Operation requires at least one played turn
    NoActiveTurn,
    /// Job is already in a terminal status
    JobAlreadyTerminal,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Slide job not found
    SlideJobNotFound,
    /// Plot job not found
    PlotJobNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Freshly generated game id already exists
    GameIdCollision,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Word source collaborator failed
    WordSourceError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::EmptyWord => "EMPTY_WORD",
            Self::InvalidSlideLength => "INVALID_SLIDE_LENGTH",
            Self::NoActiveTurn => "NO_ACTIVE_TURN",
            Self::JobAlreadyTerminal => "JOB_ALREADY_TERMINAL",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::SlideJobNotFound => "SLIDE_JOB_NOT_FOUND",
            Self::PlotJobNotFound => "PLOT_JOB_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Conflicts
            Self::GameIdCollision => "GAME_ID_COLLISION",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::WordSourceError => "WORD_SOURCE_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidGameId.as_str(), "INVALID_GAME_ID");
        assert_eq!(ErrorCode::EmptyWord.as_str(), "EMPTY_WORD");
        assert_eq!(
            ErrorCode::InvalidSlideLength.as_str(),
            "INVALID_SLIDE_LENGTH"
        );
        assert_eq!(ErrorCode::NoActiveTurn.as_str(), "NO_ACTIVE_TURN");
        assert_eq!(
            ErrorCode::JobAlreadyTerminal.as_str(),
            "JOB_ALREADY_TERMINAL"
        );
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
        assert_eq!(ErrorCode::SlideJobNotFound.as_str(), "SLIDE_JOB_NOT_FOUND");
        assert_eq!(ErrorCode::PlotJobNotFound.as_str(), "PLOT_JOB_NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::GameIdCollision.as_str(), "GAME_ID_COLLISION");
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
        assert_eq!(ErrorCode::WordSourceError.as_str(), "WORD_SOURCE_ERROR");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::GameNotFound), "GAME_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::EmptyWord), "EMPTY_WORD");
    }
}
