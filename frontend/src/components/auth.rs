use yew::prelude::*;

/// Static sign-in form. Submission is swallowed; there is no account system
/// behind it.
#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::debug!("login form submitted; authentication is not wired up");
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="w-full max-w-sm bg-white shadow-md rounded-lg h-min">
                <div class="p-6 border-b">
                    <h2 class="text-2xl text-center font-bold">{"Login"}</h2>
                    <p class="text-gray-600 mt-2">
                        {"Enter your email below to login to your account."}
                    </p>
                </div>

                <form class="p-6 grid gap-4" {onsubmit}>
                    <div class="grid gap-2">
                        <label for="email" class="text-sm font-medium text-gray-700">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            required=true
                            class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-black"
                        />
                    </div>
                    <div class="grid gap-2">
                        <label for="password" class="text-sm font-medium text-gray-700">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            required=true
                            class="w-full px-3 py-2 border rounded-lg focus:outline-none focus:ring-2 focus:ring-black"
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 mt-4 bg-blue-600 text-white rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    >
                        {"Sign in"}
                    </button>
                </form>
            </div>
        </div>
    }
}
