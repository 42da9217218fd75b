//! Builders for the descriptive messages the wrappers pass to the gates.

use bigdecimal::BigDecimal;

pub fn null_address(name: &str) -> String {
    format!("{name} cannot be the null address.")
}

pub fn quantity_must_be_positive(name: &str, quantity: &BigDecimal) -> String {
    format!("The quantity {name} inputted needs to be greater than zero. Encountered: {quantity}.")
}

pub fn insufficient_balance(token: &str, owner: &str, required: &BigDecimal) -> String {
    format!("User {owner} does not have a balance of at least {required} of token {token}.")
}

pub fn insufficient_allowance(
    token: &str,
    owner: &str,
    spender: &str,
    required: &BigDecimal,
) -> String {
    format!(
        "User {owner} has not approved {spender} to spend at least {required} of token {token}."
    )
}

pub fn not_multiple_of_natural_unit(
    set: &str,
    quantity: &BigDecimal,
    natural_unit: &BigDecimal,
) -> String {
    format!(
        "Quantity {quantity} of set {set} needs to be a multiple of its natural unit \
         {natural_unit}."
    )
}

pub fn empty_list(name: &str) -> String {
    format!("The array {name} cannot be empty.")
}

pub fn length_mismatch(first: &str, second: &str) -> String {
    format!("The {first} and {second} arrays need to be equal lengths.")
}

pub fn expiration_passed(expiration: u64) -> String {
    format!("Expiration {expiration} needs to be in the future.")
}
