use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLE");
const MEMBERS_PREFIX: Symbol = symbol_short!("ROLE_MBR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Independent administrative roles of a reward pool.
///
/// - `FundingManager` – Schedules new rewards. Administers itself.
/// - `PauseAuthority` – Pauses and unpauses participant operations.
///                      Administers itself and `Guardian`.
/// - `Guardian`       – Emergency role: may pause (never unpause) and
///                      rescue stray tokens.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    FundingManager = 1,
    PauseAuthority = 2,
    Guardian = 3,
}

impl Role {
    /// Every role, in discriminant order.
    pub const ALL: [Role; 3] = [Role::FundingManager, Role::PauseAuthority, Role::Guardian];

    /// The role whose holders may grant and revoke `self`.
    pub fn admin_role(&self) -> Role {
        match self {
            Role::FundingManager => Role::FundingManager,
            Role::PauseAuthority | Role::Guardian => Role::PauseAuthority,
        }
    }
}

/// Outcome of a grant or revoke request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoleChange {
    /// Membership changed.
    Applied,
    /// The caller was allowed but membership already had the requested shape.
    Unchanged,
    /// The caller does not hold the admin role of the target role.
    Unauthorized,
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(role: Role, account: &Address) -> (Symbol, Role, Address) {
    (ROLE_PREFIX, role, account.clone())
}

fn members_key(role: Role) -> (Symbol, Role) {
    (MEMBERS_PREFIX, role)
}

fn extend_ttl(env: &Env, key: &(Symbol, Role, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Returns true if `account` currently holds `role`.
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    let key = role_key(role, account);
    let held = env.storage().persistent().has(&key);
    if held {
        extend_ttl(env, &key);
    }
    held
}

/// Adds `account` to `role` without any authorization check.
/// Returns `false` if it was already a member.
pub fn set_role(env: &Env, role: Role, account: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }
    let key = role_key(role, account);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
    track_member(env, role, account);
    true
}

/// Removes `account` from `role` without any authorization check.
/// Returns `false` if it was not a member.
pub fn remove_role(env: &Env, role: Role, account: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }
    env.storage().persistent().remove(&role_key(role, account));
    untrack_member(env, role, account);
    true
}

/// Returns true if `caller` may grant or revoke `role`.
pub fn can_administer(env: &Env, caller: &Address, role: Role) -> bool {
    has_role(env, role.admin_role(), caller)
}

/// Grants every role to `admin`. Used once at initialization.
pub fn bootstrap(env: &Env, admin: &Address) {
    for role in Role::ALL {
        set_role(env, role, admin);
    }
}

// ── Grant / Revoke ───────────────────────────────────────────────────────────

/// Grants `role` to `account` on behalf of `caller`.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn grant_role(env: &Env, caller: &Address, role: Role, account: &Address) -> RoleChange {
    if !can_administer(env, caller, role) {
        return RoleChange::Unauthorized;
    }
    if set_role(env, role, account) {
        RoleChange::Applied
    } else {
        RoleChange::Unchanged
    }
}

/// Revokes `role` from `account` on behalf of `caller`.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn revoke_role(env: &Env, caller: &Address, role: Role, account: &Address) -> RoleChange {
    if !can_administer(env, caller, role) {
        return RoleChange::Unauthorized;
    }
    if remove_role(env, role, account) {
        RoleChange::Applied
    } else {
        RoleChange::Unchanged
    }
}

// ── Member Registry ──────────────────────────────────────────────────────────

/// Returns every address currently holding `role`.
pub fn members(env: &Env, role: Role) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&members_key(role))
        .unwrap_or(Vec::new(env))
}

fn track_member(env: &Env, role: Role, account: &Address) {
    let mut list = members(env, role);
    if !list.contains(account) {
        list.push_back(account.clone());
        env.storage().persistent().set(&members_key(role), &list);
    }
}

fn untrack_member(env: &Env, role: Role, account: &Address) {
    let list = members(env, role);
    let mut kept = Vec::new(env);
    for member in list.iter() {
        if member != *account {
            kept.push_back(member);
        }
    }
    env.storage().persistent().set(&members_key(role), &kept);
}
