// src/config/consts.rs

// Net config
pub const RESULTS_INDEX_URL: &str = "https://sc.milesplit.com/results";

// Raw results dump format. Empirical constants of the publishing
// system; never derived from content.
pub const DIVIDER_CHAR: char = '=';
pub const DIVIDER_MIN_LEN: usize = 24;
pub const TRAILING_ROWS_TO_IGNORE: usize = 10;
pub const INFER_SAMPLE_ROWS: usize = 120;

// Column-inference artifact the crawler drops when present.
pub const SPURIOUS_COLUMN: &str = "Unnamed: 2";

// The meet id is this path segment of a meet URL.
pub const MEET_ID_SEGMENT: usize = 4;

// Final path segment of the raw results page.
pub const RAW_SEGMENT: &str = "raw";
