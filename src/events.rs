// src/events.rs - Event definitions (EVM compatible) and the append-only event log

use alloy_primitives::LogData;
use alloy_sol_types::{sol, SolEvent};

// ============================================================================
// EVENT DEFINITIONS
// ============================================================================

sol! {
    #![sol(all_derives)]

    // ERC-20 Standard Events
    event Transfer(address indexed from, address indexed to, uint256 amount);
    event Approval(address indexed owner, address indexed spender, uint256 amount);

    // Access Control & Pausable
    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
    event Paused(address account);
    event Unpaused(address account);

    // Issuance & Safety Controls
    event Minted(address indexed to, uint256 amount, uint256 fee);
    event Burned(address indexed from, uint256 amount);
    event BlacklistUpdated(address indexed account, bool flag);
    event FeeUpdated(uint256 old_fee, uint256 new_fee);
    event EmergencyWithdraw(address indexed to, uint256 amount);
}

/// One structured record in the token's event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEvent {
    Transfer(Transfer),
    Approval(Approval),
    OwnershipTransferred(OwnershipTransferred),
    Paused(Paused),
    Unpaused(Unpaused),
    Minted(Minted),
    Burned(Burned),
    BlacklistUpdated(BlacklistUpdated),
    FeeUpdated(FeeUpdated),
    EmergencyWithdraw(EmergencyWithdraw),
}

impl TokenEvent {
    /// Encodes the record as an EVM log (topics + data).
    pub fn encode_log_data(&self) -> LogData {
        match self {
            Self::Transfer(e) => e.encode_log_data(),
            Self::Approval(e) => e.encode_log_data(),
            Self::OwnershipTransferred(e) => e.encode_log_data(),
            Self::Paused(e) => e.encode_log_data(),
            Self::Unpaused(e) => e.encode_log_data(),
            Self::Minted(e) => e.encode_log_data(),
            Self::Burned(e) => e.encode_log_data(),
            Self::BlacklistUpdated(e) => e.encode_log_data(),
            Self::FeeUpdated(e) => e.encode_log_data(),
            Self::EmergencyWithdraw(e) => e.encode_log_data(),
        }
    }
}

macro_rules! impl_from_event {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<$name> for TokenEvent {
                fn from(event: $name) -> Self {
                    TokenEvent::$name(event)
                }
            }
        )*
    };
}

impl_from_event!(
    Transfer,
    Approval,
    OwnershipTransferred,
    Paused,
    Unpaused,
    Minted,
    Burned,
    BlacklistUpdated,
    FeeUpdated,
    EmergencyWithdraw,
);

// ============================================================================
// EVENT LOG
// ============================================================================

/// Append-only, strictly ordered record of everything the token emitted.
///
/// The only way to remove records is [`EventLog::truncate`], which the token
/// uses to discard the records of a call that was rolled back.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<TokenEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: impl Into<TokenEvent>) {
        self.records.push(event.into());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TokenEvent> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenEvent> {
        self.records.iter()
    }

    pub fn records(&self) -> &[TokenEvent] {
        &self.records
    }

    /// Records emitted at or after position `mark`.
    pub fn since(&self, mark: usize) -> &[TokenEvent] {
        &self.records[mark.min(self.records.len())..]
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }
}
