use log::debug;
use yew::prelude::*;

use crate::clipboard::use_copy_action;
use crate::components::backdrop::Backdrop;
use crate::components::copy_row::CopyRow;
use crate::components::notice::NoticeBanner;
use crate::components::payment_panel::PaymentPanel;
use crate::config;
use crate::event_bridge::use_page_events;
use crate::models::{account_holder_fields, Panel};
use crate::state::{PageAction, PageState};

#[function_component(PaymentConfirmation)]
pub fn payment_confirmation() -> Html {
    let state = use_reducer(PageState::default);

    use_page_events(state.dispatcher());
    let on_copy = use_copy_action(state.dispatcher());

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |panel: Panel| {
            debug!("Toggling panel {}", panel);
            dispatcher.dispatch(PageAction::TogglePanel(panel));
        })
    };

    html! {
        <div class="payment-page" dir="rtl">
            <style>{PAGE_STYLES}</style>
            <Backdrop pointer={state.pointer} scroll_progress={state.scroll_progress} />

            <main class="page-content">
                <section class="status-section">
                    <div class="status-badge">
                        <div class="status-ring" />
                        <div class="status-ring" style="animation-delay: 1s;" />
                        <div class="status-logo">
                            <img src={config::LOGO_ASSET} alt="Naguib Selim" width="80" height="40" />
                        </div>
                    </div>
                    <h1 class="status-title">{"تم تجهيز طلبكم"}</h1>
                    <p class="status-subtitle" dir="ltr">{"Your Order is Ready"}</p>
                    <p class="status-body">
                        {"نحيطكم علماً بأنه تم الانتهاء من تجهيز الأوردر الخاص بكم لتأكيد موعد التركيب النهائي"}
                    </p>
                </section>

                <NoticeBanner />

                <section class="payment-options">
                    <h2 class="section-title">{"خيارات الدفع • Payment Options"}</h2>
                    { for Panel::ALL.iter().map(|panel| html! {
                        <PaymentPanel
                            key={panel.id()}
                            panel={*panel}
                            expanded={state.is_expanded(*panel)}
                            copied={state.copied}
                            on_toggle={on_toggle.clone()}
                            on_copy={on_copy.clone()}
                        />
                    }) }
                </section>

                <section class="account-holder">
                    <p class="section-label">{"اسم الحساب • Account Holder Name:"}</p>
                    { for account_holder_fields().into_iter().map(|field| html! {
                        <CopyRow
                            key={field.key.as_str()}
                            {field}
                            copied={state.is_copied(field.key)}
                            on_copy={on_copy.clone()}
                        />
                    }) }
                </section>

                <section class="next-steps">
                    <h3 class="section-title">{"الخطوة التالية • Next Step"}</h3>
                    <p><span class="step-number">{"1."}</span>{" بعد إتمام عملية السداد، يرجى إرسال صورة واضحة من إيصال الدفع"}</p>
                    <p dir="ltr"><span class="step-number">{"2."}</span>{" After payment, send a clear receipt screenshot"}</p>
                </section>

                <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="whatsapp-link">
                    <span class="whatsapp-button">
                        <span class="whatsapp-shine" />
                        <span class="whatsapp-icon">{"💬"}</span>
                        <span class="whatsapp-label">
                            {"إرسال عبر الواتساب"}
                            <br />
                            {"Send via WhatsApp"}
                        </span>
                    </span>
                </a>

                <footer class="page-footer">
                    <p>{"لتأكيد حجز موعد التركيب • To confirm installation date"}</p>
                    <p class="footer-brand">{"Naguib Selim • Fabrics & More"}</p>
                </footer>
            </main>
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    .payment-page {
        min-height: 100vh;
        position: relative;
        overflow: hidden;
        background: linear-gradient(135deg, #f5f1eb 0%, #ede8e0 50%, #e8e0d6 100%);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Tahoma, Arial, sans-serif;
        color: #3e2723;
    }
    .logo-pattern {
        position: fixed;
        inset: 0;
        opacity: 0.08;
        pointer-events: none;
        z-index: 0;
        background-repeat: repeat;
        background-size: 600px 600px;
        background-position: 0 0;
        animation: logoFloat 25s ease-in-out infinite;
    }
    .gradient-overlay {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
        background: linear-gradient(120deg, rgba(139, 69, 19, 0.05), transparent, rgba(160, 82, 45, 0.05));
        background-size: 200% 200%;
        animation: gradient-shift 15s ease infinite;
    }
    .particles {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
    }
    .particle {
        position: absolute;
        border-radius: 50%;
        background: #8b4513;
        opacity: 0.08;
        animation-name: float;
        animation-timing-function: ease-in-out;
        animation-iteration-count: infinite;
    }
    .pointer-glow {
        position: fixed;
        width: 800px;
        height: 800px;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(139, 69, 19, 0.12) 0%, transparent 70%);
        transform: translate(-50%, -50%);
        pointer-events: none;
        z-index: 0;
        transition: left 0.2s ease-out, top 0.2s ease-out;
    }
    .progress-bar {
        position: fixed;
        top: 0;
        left: 0;
        height: 4px;
        z-index: 50;
        background: linear-gradient(90deg, #8b4513, #a0522d, #cd853f);
        transition: width 0.1s linear;
    }
    .page-content {
        position: relative;
        z-index: 10;
        max-width: 640px;
        margin: 0 auto;
        padding: 48px 20px 32px;
        animation: fade-in 0.8s ease-out;
    }
    .status-section {
        text-align: center;
        margin-bottom: 32px;
    }
    .status-badge {
        position: relative;
        width: 128px;
        height: 128px;
        margin: 0 auto 24px;
        animation: bounce-in 0.8s ease-out;
    }
    .status-ring {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        border: 2px solid rgba(139, 69, 19, 0.3);
        animation: ping 2s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .status-logo {
        position: absolute;
        inset: 8px;
        border-radius: 50%;
        background: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 12px 32px rgba(139, 69, 19, 0.25);
    }
    .status-logo img {
        animation: logo-glow 3s ease-in-out infinite;
    }
    .status-title {
        font-size: 2.25rem;
        font-weight: 800;
        margin: 0 0 8px;
        background: linear-gradient(90deg, #8b4513, #cd853f, #8b4513);
        background-size: 200% auto;
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        animation: gradient-text 4s ease infinite;
    }
    .status-subtitle {
        font-size: 1.25rem;
        font-weight: 600;
        color: #6d4c41;
        margin: 0 0 12px;
    }
    .status-body {
        font-size: 1rem;
        line-height: 1.8;
        color: #5d4037;
    }
    .notice-banner {
        display: flex;
        gap: 16px;
        align-items: flex-start;
        padding: 20px;
        margin-bottom: 32px;
        border-radius: 20px;
        background: rgba(255, 243, 224, 0.9);
        border: 2px solid #ffb74d;
        box-shadow: 0 8px 24px rgba(255, 152, 0, 0.15);
        animation: slide-up 0.8s ease-out;
    }
    .notice-banner.compact {
        margin-bottom: 16px;
        padding: 14px;
        box-shadow: none;
        animation: none;
    }
    .notice-icon {
        position: relative;
        flex-shrink: 0;
        width: 36px;
        height: 36px;
        border-radius: 50%;
        background: #ff9800;
        color: #fff;
        font-weight: 800;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .notice-pulse {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        background: #ff9800;
        opacity: 0.4;
        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .notice-text p {
        margin: 0 0 4px;
    }
    .notice-title {
        font-weight: 800;
        color: #e65100;
    }
    .section-title {
        text-align: center;
        font-size: 1.4rem;
        font-weight: 700;
        color: #5d4037;
        margin: 0 0 20px;
    }
    .payment-options {
        margin-bottom: 24px;
        animation: slide-up-delay 1s ease-out;
    }
    .payment-panel {
        margin-bottom: 16px;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.85);
        border: 2px solid rgba(139, 69, 19, 0.15);
        box-shadow: 0 6px 20px rgba(139, 69, 19, 0.08);
        overflow: hidden;
        transition: border-color 0.3s ease, box-shadow 0.3s ease;
    }
    .payment-panel.expanded {
        border-color: rgba(139, 69, 19, 0.4);
        box-shadow: 0 12px 32px rgba(139, 69, 19, 0.15);
    }
    .panel-header {
        width: 100%;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 20px 24px;
        background: transparent;
        border: none;
        cursor: pointer;
        text-align: inherit;
        font: inherit;
        color: inherit;
    }
    .panel-title p {
        margin: 0;
    }
    .panel-title-ar {
        font-size: 1.25rem;
        font-weight: 700;
    }
    .panel-title-en {
        font-size: 0.9rem;
        color: #8d6e63;
    }
    .chevron {
        font-size: 1.6rem;
        color: #8b4513;
        margin-left: 16px;
        transition: transform 0.3s ease;
    }
    .panel-body {
        padding: 0 24px 24px;
        transform-origin: top;
        animation: expand 0.35s ease-out;
    }
    .account-holder,
    .next-steps {
        padding: 20px 24px;
        margin-bottom: 24px;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.7);
        border: 2px dashed rgba(139, 69, 19, 0.25);
    }
    .section-label {
        font-weight: 700;
        margin: 0 0 12px;
    }
    .copy-row {
        margin-bottom: 14px;
    }
    .copy-label {
        display: block;
        font-size: 0.85rem;
        font-weight: 600;
        color: #8d6e63;
        margin-bottom: 6px;
    }
    .copy-value-box {
        display: flex;
        align-items: center;
        gap: 12px;
        padding: 12px 14px;
        border-radius: 14px;
        background: #faf6f1;
        border: 1px solid rgba(139, 69, 19, 0.2);
    }
    .copy-value {
        flex: 1;
        font-size: 1.05rem;
        font-weight: 700;
        letter-spacing: 0.05em;
        word-break: break-all;
        user-select: all;
    }
    .copy-button {
        position: relative;
        flex-shrink: 0;
        width: 40px;
        height: 40px;
        border-radius: 12px;
        border: none;
        background: #8b4513;
        color: #fff;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .copy-button:hover {
        transform: scale(1.08);
        background: #a0522d;
    }
    .copied-badge {
        position: absolute;
        bottom: 110%;
        left: 50%;
        transform: translateX(-50%);
        white-space: nowrap;
        padding: 4px 10px;
        border-radius: 8px;
        background: #2e7d32;
        color: #fff;
        font-size: 0.75rem;
        animation: fade-in 0.2s ease-out;
    }
    .next-steps p {
        margin: 0 0 8px;
        line-height: 1.7;
    }
    .step-number {
        font-weight: 800;
        color: #8b4513;
    }
    .whatsapp-link {
        display: block;
        text-decoration: none;
        margin-bottom: 32px;
    }
    .whatsapp-button {
        position: relative;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 12px;
        padding: 18px 24px;
        border-radius: 20px;
        background: linear-gradient(135deg, #25d366, #128c7e);
        color: #fff;
        font-size: 1.1rem;
        font-weight: 700;
        text-align: center;
        box-shadow: 0 12px 28px rgba(37, 211, 102, 0.35);
        transition: transform 0.3s ease;
    }
    .whatsapp-button:hover {
        transform: translateY(-2px) scale(1.02);
    }
    .whatsapp-shine {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.25), transparent);
        transform: translateX(-100%);
        transition: transform 0.8s ease;
    }
    .whatsapp-button:hover .whatsapp-shine {
        transform: translateX(100%);
    }
    .whatsapp-icon {
        font-size: 1.6rem;
    }
    .page-footer {
        text-align: center;
        font-size: 0.85rem;
        color: #8d6e63;
    }
    .page-footer p {
        margin: 0 0 4px;
    }
    .footer-brand {
        font-weight: 700;
        color: #6d4c41;
    }
    @keyframes fade-in {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slide-up {
        from { opacity: 0; transform: translateY(50px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slide-up-delay {
        0%, 30% { opacity: 0; transform: translateY(50px); }
        100% { opacity: 1; transform: translateY(0); }
    }
    @keyframes bounce-in {
        0% { transform: scale(0.6); opacity: 0; }
        50% { transform: scale(1.15); }
        100% { transform: scale(1); opacity: 1; }
    }
    @keyframes expand {
        from { opacity: 0; max-height: 0; transform: scaleY(0); }
        to { opacity: 1; max-height: 600px; transform: scaleY(1); }
    }
    @keyframes ping {
        75%, 100% { transform: scale(1.5); opacity: 0; }
    }
    @keyframes logoFloat {
        0%, 100% { transform: translate(0, 0) rotate(0deg); }
        25% { transform: translate(30px, -30px) rotate(2deg); }
        50% { transform: translate(-20px, 20px) rotate(-2deg); }
        75% { transform: translate(15px, -15px) rotate(1deg); }
    }
    @keyframes logo-glow {
        0%, 100% { filter: brightness(1.05) contrast(1.05) drop-shadow(0 0 20px rgba(139, 69, 19, 0.3)); }
        50% { filter: brightness(1.1) contrast(1.1) drop-shadow(0 0 30px rgba(139, 69, 19, 0.5)); }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0) translateX(0); opacity: 0.08; }
        25% { transform: translateY(-30px) translateX(15px); opacity: 0.15; }
        50% { transform: translateY(-60px) translateX(-15px); opacity: 0.1; }
        75% { transform: translateY(-30px) translateX(8px); opacity: 0.15; }
    }
    @keyframes gradient-shift {
        0%, 100% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
    }
    @keyframes gradient-text {
        0%, 100% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
    }
    @media (max-width: 480px) {
        .status-title {
            font-size: 1.75rem;
        }
        .panel-header {
            padding: 16px 18px;
        }
        .panel-body {
            padding: 0 18px 18px;
        }
    }
"#;
