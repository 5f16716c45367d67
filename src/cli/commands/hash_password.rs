use crate::auth::password::hash_password;

pub fn handle(password: &str) -> anyhow::Result<()> {
    println!("{}", hash_password(password)?);
    Ok(())
}
