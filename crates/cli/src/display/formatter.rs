use cppbuild_core::{BuildTaskDescriptor, PersistedTask};

pub fn print_tasks(tasks: &[BuildTaskDescriptor]) {
    for (i, task) in tasks.iter().enumerate() {
        println!("{}. {}", i + 1, task.label);
        println!("   🔧 Command: {} {}", task.command, task.args.join(" "));
        println!("   📁 Working directory: {}", task.working_directory);
        println!("   📝 {}", task.detail);
    }
}

pub fn print_persisted_tasks(tasks: &[PersistedTask]) {
    for task in tasks {
        let marker = if task.is_default { " ⭐ (default)" } else { "" };
        println!("• {}{}", task.definition.label, marker);
        println!(
            "   🔧 Command: {} {}",
            task.definition.command,
            task.definition.args.join(" ")
        );
        if let Some(cwd) = task.definition.options.as_ref().and_then(|o| o.cwd.as_deref()) {
            println!("   📁 Working directory: {}", cwd);
        }
    }
}
