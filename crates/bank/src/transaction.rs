use std::fmt;

/// A transfer decoded from `;`-separated `key:value` fields.
///
/// Decoding accepts whatever bytes carried a valid tag. Invalid UTF-8 is
/// replaced, fields without a `:` and unknown keys are skipped, and a repeated
/// key overrides the earlier one, so an appended `;amount:...` wins over the
/// first amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
  from: String,
  to: String,
  amount: String,
}

impl Transaction {
  #[must_use]
  pub fn new(from: impl Into<String>, to: impl Into<String>, amount: impl Into<String>) -> Self {
    Self { from: from.into(), to: to.into(), amount: amount.into() }
  }

  #[must_use]
  pub fn parse(bytes: &[u8]) -> Self {
    let text = String::from_utf8_lossy(bytes);
    let mut tx = Self::default();

    for field in text.split(';') {
      let mut parts = field.split(':');
      let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
        continue;
      };
      let slot = match key {
        "from" => &mut tx.from,
        "to" => &mut tx.to,
        "amount" => &mut tx.amount,
        _ => continue,
      };
      value.clone_into(slot);
    }
    tx
  }

  /// Wire form accepted by [`parse`](Self::parse).
  #[must_use]
  pub fn encode(&self) -> Vec<u8> {
    format!("from:{};to:{};amount:{}", self.from, self.to, self.amount).into_bytes()
  }

  #[must_use]
  pub fn from_account(&self) -> &str {
    &self.from
  }

  #[must_use]
  pub fn to_account(&self) -> &str {
    &self.to
  }

  #[must_use]
  pub fn amount(&self) -> &str {
    &self.amount
  }
}

impl fmt::Display for Transaction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "from {} to {}, amount {}", self.from, self.to, self.amount)
  }
}
