use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the single lottery state PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Price of one ticket, in lamports, when the lottery is first created.
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;

/// Tickets per round when the lottery is first created.
pub const DEFAULT_MAX_TICKETS: u32 = 4;

/// Upper bound for `max_tickets`. The state account is allocated to hold
/// this many buyers.
pub const MAX_TICKET_CAPACITY: u32 = 256;

/// `MAX_TICKET_CAPACITY` as the length of `Lottery::players`.
pub const MAX_PLAYERS: usize = MAX_TICKET_CAPACITY as usize;
