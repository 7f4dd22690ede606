pub use clap::Parser;
use clap::ValueEnum;

pub const DEFAULT_CHAIN: &str = "ethereum";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Encode the routing path for the router's adapter call
    Adapter,
    /// Encode the calls a proxy-exchange wrapper issues by itself
    Direct,
    /// Decode ExchangeProxy call data
    Decode,
}

#[derive(Parser)]
/// Encode Balancer swaps for the router or for direct execution
///
/// In `adapter` and `direct` mode, reads a JSON object from stdin with the following structure:
/// ```json
/// {
///     "srcToken": "0x...",
///     "destToken": "0x...",
///     "srcAmount": "123...",
///     "destAmount": "123...",
///     "side": "SELL",
///     "data": {
///         "exchangeProxy": "0x...",
///         "swaps": [{
///             "pool": "0x...",
///             "tokenInParam": "123...",
///             "tokenOutParam": "123...",
///             "maxPrice": "123..."
///         }]
///     }
/// }
/// ```
/// Use 0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE for the native asset. If `exchangeProxy` is
/// omitted, the chain's default from the addresses file is used.
///
/// In `decode` mode, reads `{"data": "0x..."}` with ExchangeProxy call data.
///
/// Direct mode does not query allowances on-chain: an approval is always emitted for ERC20
/// sources.
pub struct Cli {
    /// What to produce from the input
    #[arg(short, long, value_enum, default_value_t = Mode::Adapter)]
    pub mode: Mode,

    /// Chain whose addresses are used
    #[arg(short, long, default_value = DEFAULT_CHAIN)]
    pub chain: String,

    /// Path to a JSON addresses file overriding the bundled one
    #[arg(long)]
    pub config: Option<String>,

    /// Log level or filter directives, e.g. `debug` or `balancer_adapter=trace`. Falls back to
    /// RUST_LOG, then `warn`
    #[arg(short, long)]
    pub log_level: Option<String>,
}
