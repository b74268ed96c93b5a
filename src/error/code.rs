/// Error codes with category prefix
///
/// Categories:
/// - NET: Network connectivity errors
/// - API: Countries API errors
/// - IO: File system operations
/// - CFG: Configuration parsing/validation
/// - TUI: Terminal UI errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors (NET001-NET099)
    /// Connection failed
    Net001,
    /// Request timeout
    Net002,

    // API errors (API001-API099)
    /// Rate limit exceeded
    Api001,
    /// Endpoint not found
    Api002,
    /// Server error (5xx)
    Api003,
    /// Malformed response body
    Api004,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // TUI errors (TUI001-TUI099)
    /// Terminal initialization failed
    Tui001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Every defined code, in catalogue order
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::Net001,
        ErrorCode::Net002,
        ErrorCode::Api001,
        ErrorCode::Api002,
        ErrorCode::Api003,
        ErrorCode::Api004,
        ErrorCode::Io001,
        ErrorCode::Io002,
        ErrorCode::Cfg001,
        ErrorCode::Tui001,
        ErrorCode::Int001,
    ];

    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "NET001",
            ErrorCode::Net002 => "NET002",
            ErrorCode::Api001 => "API001",
            ErrorCode::Api002 => "API002",
            ErrorCode::Api003 => "API003",
            ErrorCode::Api004 => "API004",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "Unable to reach the countries API",
            ErrorCode::Net002 => "The request timed out while waiting for the countries API",
            ErrorCode::Api001 => "The countries API rate limit has been exceeded",
            ErrorCode::Api002 => "The countries endpoint was not found at the configured base URL",
            ErrorCode::Api003 => "The countries API encountered an internal error",
            ErrorCode::Api004 => "The country data could not be parsed",
            ErrorCode::Io001 => "The specified file was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Tui001 => "Failed to drive the terminal interface",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "1. Check your internet connection\n2. Verify --base-url / KYC_API_BASE_URL\n3. Use --from-file with a saved response",
            ErrorCode::Net002 => "1. Check your internet connection speed\n2. Raise timeout_secs in config.toml\n3. Try again later",
            ErrorCode::Api001 => "1. Wait a few minutes before retrying\n2. Use --from-file with a saved response",
            ErrorCode::Api002 => "1. Verify the base URL ends with the API version (e.g. /v2)\n2. Remove api_base_url from config.toml to use the default",
            ErrorCode::Api003 => "1. Wait a few minutes and retry\n2. Use --from-file with a saved response",
            ErrorCode::Api004 => "1. Verify the base URL points to a REST Countries v2 API\n2. Check the saved response is a JSON array of countries",
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted",
            ErrorCode::Io002 => "1. Check file permissions\n2. Verify ownership of the file",
            ErrorCode::Cfg001 => "1. Check the TOML syntax of ~/.config/kyc/config.toml\n2. Remove unknown keys",
            ErrorCode::Tui001 => "1. Ensure your terminal supports raw mode\n2. Try a different terminal emulator\n3. Use 'kyc list' for non-interactive output",
            ErrorCode::Int001 => "1. Try the operation again\n2. Re-run with --log-file to capture debug logs",
        }
    }
}
