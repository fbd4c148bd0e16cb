use crate::layout::{Footer, Header};
use crate::sections::{About, Contact, Experience, Hero, Technologies};
use crate::shared::active_section::ActiveSectionProvider;
use crate::shared::language::LanguageProvider;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LanguageProvider>
            <ThemeProvider>
                <ActiveSectionProvider>
                    <Header />
                    <main>
                        <Hero />
                        <About />
                        <Technologies />
                        <Experience />
                        <Contact />
                    </main>
                    <Footer />
                </ActiveSectionProvider>
            </ThemeProvider>
        </LanguageProvider>
    }
}
