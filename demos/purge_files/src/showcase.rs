//! A script using every declaration form: handlers, inline help lines and a
//! switch without a handler.

use script_opts::{DeclarationError, OptionSpec, Script};

/// Declares the option showcase script.
///
/// # Errors
///
/// Returns [`DeclarationError`] if an option declaration is malformed.
pub fn showcase_script() -> Result<Script, DeclarationError> {
    Ok(Script::new("option_showcase")
        .banner("Usage: option_showcase [options]")
        .description("By default, this will be an awesome description.")
        .description("You can have as many descriptions as you like,\nor add line breaks manually.")
        .option(
            OptionSpec::new(["-p", "--pass-param PARAM", "Pass a param"])?
                .on(|options, value| options.assign("param", value)),
        )
        .option(
            OptionSpec::new(["-r", "--run-fast", "Something"])?
                .on(|options, _| options.set("fast", true)),
        )
        .option(OptionSpec::new(["-x", "marks the spot"])?)
        .post_initialize(|instance| {
            instance.message("This runs after the instance is initialized.")?;
            instance.message("Scripts do not have to provide it.")?;
            Ok(())
        })
        .run(|instance| {
            instance.message("I only show up when running verbosely.")?;
            let options = instance.options().to_string();
            instance.say(options)?;
            instance.say("INSERT CODE WITH SIDE EFFECTS HERE.")?;
            Ok(())
        }))
}
