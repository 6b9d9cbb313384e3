use crate::utils::error::{CollatzError, Result};

/// One Collatz step: even n halves, odd n becomes 3n+1. The multiplication is
/// checked since 3n+1 can exceed u64 for n near the representable maximum.
pub fn step(n: u64) -> Result<u64> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        n.checked_mul(3)
            .and_then(|m| m.checked_add(1))
            .ok_or(CollatzError::Overflow { value: n })
    }
}

/// Full trajectory from n down to 1, endpoints included. n = 1 yields `[1]`.
pub fn sequence(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(CollatzError::InvalidInput { value: n });
    }

    let mut results = vec![n];
    let mut current = n;
    while current != 1 {
        current = step(current)?;
        results.push(current);
    }

    Ok(results)
}

/// Element count of the trajectory without materializing it. Used by the
/// bounded search, where only lengths matter.
pub fn sequence_length(n: u64) -> Result<u64> {
    if n == 0 {
        return Err(CollatzError::InvalidInput { value: n });
    }

    let mut length = 1u64;
    let mut current = n;
    while current != 1 {
        current = step(current)?;
        length += 1;
    }

    Ok(length)
}
