use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("No tickets available")]
    CapacityExceeded,
    #[msg("Paid amount is below the cost of the requested tickets")]
    InsufficientPayment,
    #[msg("Only the lottery admin can do this")]
    Unauthorized,
    #[msg("Round can only be closed once every ticket is sold")]
    RoundNotComplete,
    #[msg("Parameters cannot change once tickets have been sold")]
    RoundInProgress,
    #[msg("Instruction not allowed")]
    Rejected,
    #[msg("At least one ticket must be bought")]
    InvalidTicketCount,
    #[msg("Ticket cost must be positive")]
    InvalidTicketCost,
    #[msg("Max tickets must be between 1 and the account capacity")]
    InvalidMaxTickets,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Winner account does not hold the winning ticket")]
    WinnerMismatch,
}
