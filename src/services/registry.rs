use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::models::{ChainEntry, ChainInfo};

pub const NEUTRAL_COLOR: &str = "bg-gray-500";
const LOGO_BASE: &str = "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains";

// (lookup key, id, display name, logo directory, color)
const CHAIN_TABLE: &[(&str, &str, &str, &str, &str)] = &[
    ("ethereum", "ethereum", "Ethereum", "ethereum", "bg-blue-500"),
    ("arbitrum", "arbitrum", "Arbitrum", "arbitrum", "bg-blue-700"),
    ("optimism", "optimism", "Optimism", "optimism", "bg-red-500"),
    ("base", "base", "Base", "base", "bg-blue-400"),
    ("polygon", "polygon", "Polygon", "polygon", "bg-purple-500"),
    ("avalanche", "avax", "Avalanche", "avalanche", "bg-orange-500"),
    ("bsc", "bsc", "BNB Chain", "binance", "bg-yellow-500"),
    ("fantom", "fantom", "Fantom", "fantom", "bg-blue-800"),
    ("metis", "metis", "Metis", "metis", "bg-teal-600"),
    ("celo", "celo", "Celo", "celo", "bg-green-500"),
    ("solana", "solana", "Solana", "solana", "bg-purple-600"),
    ("zksync", "zksync", "zkSync", "zksync", "bg-blue-600"),
    ("linea", "linea", "Linea", "linea", "bg-gray-600"),
    ("mantle", "mantle", "Mantle", "mantle", "bg-gray-700"),
    ("scroll", "scroll", "Scroll", "scroll", "bg-gray-800"),
    ("mode", "mode", "Mode", "mode", "bg-indigo-600"),
    ("blast", "blast", "Blast", "blast", "bg-yellow-600"),
    ("manta", "manta", "Manta", "manta", "bg-blue-500"),
    ("zkevm", "zkevm", "zkEVM", "zkevm", "bg-purple-700"),
    ("opbnb", "opbnb", "opBNB", "opbnb", "bg-yellow-400"),
    ("kava", "kava", "Kava", "kava", "bg-orange-500"),
    ("klaytn", "klaytn", "Klaytn", "klaytn", "bg-purple-800"),
    ("cronos", "cronos", "Cronos", "cronos", "bg-indigo-500"),
    ("moonbeam", "moonbeam", "Moonbeam", "moonbeam", "bg-pink-500"),
    ("moonriver", "moonriver", "Moonriver", "moonriver", "bg-pink-600"),
    ("harmony", "harmony", "Harmony", "harmony", "bg-green-600"),
    ("aurora", "aurora", "Aurora", "aurora", "bg-blue-300"),
    ("astar", "astar", "Astar", "astar", "bg-purple-400"),
    ("acala", "acala", "Acala", "acala", "bg-blue-200"),
    ("karura", "karura", "Karura", "karura", "bg-red-400"),
    ("heco", "heco", "HECO", "heco", "bg-green-400"),
    ("okexchain", "okexchain", "OKX Chain", "okexchain", "bg-blue-600"),
    ("iotex", "iotex", "IoTeX", "iotex", "bg-gray-500"),
    ("rsk", "rsk", "RSK", "rsk", "bg-orange-600"),
    ("smartbch", "smartbch", "SmartBCH", "smartbch", "bg-green-700"),
    ("oasis", "oasis", "Oasis", "oasis", "bg-teal-500"),
    ("velas", "velas", "Velas", "velas", "bg-red-700"),
    ("wanchain", "wanchain", "Wanchain", "wanchain", "bg-blue-800"),
    ("waves", "waves", "Waves", "waves", "bg-blue-900"),
    ("theta", "theta", "Theta", "theta", "bg-indigo-700"),
    ("algorand", "algorand", "Algorand", "algorand", "bg-black"),
    ("osmosis", "osmosis", "Osmosis", "osmosis", "bg-purple-900"),
    ("secret", "secret", "Secret", "secret", "bg-gray-800"),
    ("thorchain", "thorchain", "THORChain", "thorchain", "bg-red-800"),
    ("kujira", "kujira", "Kujira", "kujira", "bg-blue-700"),
    ("injective", "injective", "Injective", "injective", "bg-blue-600"),
    ("juno", "juno", "Juno", "juno", "bg-purple-600"),
    ("stargaze", "stargaze", "Stargaze", "stargaze", "bg-indigo-800"),
    ("chihuahua", "chihuahua", "Chihuahua", "chihuahua", "bg-yellow-700"),
    ("comdex", "comdex", "Comdex", "comdex", "bg-blue-500"),
    ("crescent", "crescent", "Crescent", "crescent", "bg-indigo-500"),
    ("persistence", "persistence", "Persistence", "persistence", "bg-purple-500"),
    ("quicksilver", "quicksilver", "Quicksilver", "quicksilver", "bg-blue-400"),
    ("stride", "stride", "Stride", "stride", "bg-green-500"),
    ("terra", "terra", "Terra", "terra", "bg-purple-700"),
    ("terraclassic", "terraclassic", "Terra Classic", "terraclassic", "bg-purple-800"),
    ("evmos", "evmos", "Evmos", "evmos", "bg-purple-600"),
    ("agoric", "agoric", "Agoric", "agoric", "bg-blue-600"),
    ("assetmantle", "assetmantle", "AssetMantle", "assetmantle", "bg-indigo-600"),
    ("axelar", "axelar", "Axelar", "axelar", "bg-red-500"),
    ("band", "band", "Band", "band", "bg-blue-500"),
    ("bitsong", "bitsong", "BitSong", "bitsong", "bg-purple-500"),
    ("carbon", "carbon", "Carbon", "carbon", "bg-green-600"),
    ("cheqd", "cheqd", "Cheqd", "cheqd", "bg-blue-700"),
    ("cosmos", "cosmos", "Cosmos", "cosmos", "bg-blue-600"),
    ("cryptoorg", "cryptoorg", "Crypto.org", "cryptoorg", "bg-purple-600"),
    ("emoney", "emoney", "e-Money", "emoney", "bg-blue-500"),
    ("fetchai", "fetchai", "Fetch.ai", "fetchai", "bg-blue-600"),
    ("gravitybridge", "gravitybridge", "Gravity Bridge", "gravitybridge", "bg-gray-700"),
    ("irisnet", "irisnet", "IRISnet", "irisnet", "bg-purple-500"),
    ("likecoin", "likecoin", "LikeCoin", "likecoin", "bg-blue-500"),
    ("sentinel", "sentinel", "Sentinel", "sentinel", "bg-blue-600"),
    ("sifchain", "sifchain", "Sifchain", "sifchain", "bg-purple-500"),
    ("umee", "umee", "Umee", "umee", "bg-purple-600"),
    ("vidulum", "vidulum", "Vidulum", "vidulum", "bg-blue-500"),
    ("xpla", "xpla", "XPLA", "xpla", "bg-blue-600"),
    ("zilliqa", "zilliqa", "Zilliqa", "zilliqa", "bg-blue-500"),
    ("berachain", "berachain", "Berachain", "berachain", "bg-green-500"),
    ("telos", "telos", "Telos", "telos", "bg-blue-500"),
];

lazy_static! {
    static ref CHAINS: HashMap<&'static str, ChainInfo> = CHAIN_TABLE
        .iter()
        .map(|&(key, id, name, logo_dir, color)| {
            (
                key,
                ChainInfo {
                    id: id.to_string(),
                    name: name.to_string(),
                    logo_uri: Some(logo_uri(logo_dir)),
                    color: color.to_string(),
                },
            )
        })
        .collect();
}

fn logo_uri(dir: &str) -> String {
    format!("{}/{}/info/logo.png", LOGO_BASE, dir)
}

/// Looks up `chain_id` case-insensitively, synthesizing a record for chains
/// missing from the table.
pub fn resolve(chain_id: &str) -> ChainEntry {
    let key = chain_id.to_lowercase();
    if let Some(info) = CHAINS.get(key.as_str()) {
        return ChainEntry::Known(info.clone());
    }

    let mut chars = chain_id.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    ChainEntry::Synthesized(ChainInfo {
        id: chain_id.to_string(),
        name,
        logo_uri: Some(logo_uri(&key)),
        color: NEUTRAL_COLOR.to_string(),
    })
}

pub fn lookup(chain_id: &str) -> ChainInfo {
    resolve(chain_id).into_info()
}

pub fn known_chain_count() -> usize {
    CHAINS.len()
}
