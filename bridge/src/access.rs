//! Access control guards.
//!
//! Pure checks against the configuration aggregate; every mutating entry
//! point evaluates the relevant guard before touching state.

use cosmwasm_std::Addr;

use crate::error::ContractError;
use crate::state::Config;

/// Fails unless the sender is the owner.
pub fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if sender != &config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Fails unless the sender is the program (relayer) or the owner.
pub fn ensure_program_or_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if sender != &config.owner && sender != &config.program {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Fails while the bridge is paused.
pub fn ensure_active(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::BridgePaused);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Uint128;

    fn config() -> Config {
        Config {
            bridge_chain: "massa".to_string(),
            token: Addr::unchecked("cdt"),
            owner: Addr::unchecked("owner"),
            program: Addr::unchecked("program"),
            fee_denom: "uluna".to_string(),
            fees_in_dollar: Uint128::new(1_000_000_000),
            fees_in_cdt_percentage: 1,
            minimum_transfer_quantity: Uint128::new(1_000_000_000),
            lock_duration: 172_800,
            unlock_window: 1_296_000,
            paused: false,
        }
    }

    #[test]
    fn owner_guard() {
        let config = config();
        assert!(ensure_owner(&config, &Addr::unchecked("owner")).is_ok());
        assert_eq!(
            ensure_owner(&config, &Addr::unchecked("program")),
            Err(ContractError::Unauthorized)
        );
    }

    #[test]
    fn program_or_owner_guard() {
        let config = config();
        assert!(ensure_program_or_owner(&config, &Addr::unchecked("owner")).is_ok());
        assert!(ensure_program_or_owner(&config, &Addr::unchecked("program")).is_ok());
        assert_eq!(
            ensure_program_or_owner(&config, &Addr::unchecked("someone")),
            Err(ContractError::Unauthorized)
        );
    }

    #[test]
    fn active_guard() {
        let mut config = config();
        assert!(ensure_active(&config).is_ok());
        config.paused = true;
        assert_eq!(ensure_active(&config), Err(ContractError::BridgePaused));
    }
}
