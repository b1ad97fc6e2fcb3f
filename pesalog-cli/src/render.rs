//! Plain-text rendering of parsed records.

use pesalog_core::TransactionRecord;

/// Print every populated field of a record, one per line.
pub fn print_record(record: &TransactionRecord) {
    println!("  kind:            {}", record.kind);
    println!("  status:          {}", record.status);
    if let Some(id) = &record.transaction_id {
        println!("  transaction id:  {id}");
    }
    if let Some(amount) = record.amount {
        println!("  amount:          Ksh {amount}");
    }
    if let Some(name) = &record.counterparty_name {
        println!("  counterparty:    {name}");
    }
    if let Some(identifier) = &record.counterparty_identifier {
        println!("  identifier:      {identifier}");
    }
    if let Some(balance) = record.balance {
        println!("  balance:         Ksh {balance}");
    }
    if let Some(cost) = record.transaction_cost {
        println!("  cost:            Ksh {cost}");
    }
    if let Some(limit) = record.daily_limit {
        println!("  daily limit:     Ksh {limit}");
    }
    if let Some(timestamp) = record.timestamp {
        println!("  time:            {}", timestamp.format("%Y-%m-%d %H:%M"));
    }
    if let Some(reason) = &record.failure_reason {
        println!("  reason:          {reason}");
    }
}
