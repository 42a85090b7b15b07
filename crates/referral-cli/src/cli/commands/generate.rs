use super::load_user_info;
use crate::cli::args::GenerateArgs;
use crate::exit_codes;
use referral_core::compose::generate_referral_email;
use referral_core::report::console::GENERATION_FAILED_MESSAGE;

pub fn cmd_generate(args: GenerateArgs) -> anyhow::Result<i32> {
    let info = load_user_info(&args.input)?;
    let email = generate_referral_email(&info);
    if email.is_empty() {
        println!("{}", GENERATION_FAILED_MESSAGE);
        return Ok(exit_codes::GENERATION_FAILED);
    }
    print!("{}", email);
    Ok(exit_codes::SUCCESS)
}
