//! Built-in HTML templates used by the tests, the demos, and as the default
//! template set when the caller supplies none.
//!
//! The root template covers the whole document; the row block is rendered
//! once per line item and injected (unescaped) through `{{{rows}}}`.

/// Default root invoice document template.
pub fn default_root_template() -> &'static str {
    r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Invoice {{invoice.number.series}}{{invoice.number.separator}}{{invoice.number.id}}</title>
    <style>
        body { font-family: sans-serif; margin: 40px; color: #222; }
        h1 { color: #1a365d; }
        table { width: 100%; border-collapse: collapse; margin: 24px 0; }
        th, td { border: 1px solid #ccc; padding: 8px; text-align: left; }
        th { background: #eee; }
        .parties { display: flex; justify-content: space-between; }
        .totals { text-align: right; font-weight: bold; }
        .explanation { margin-top: 32px; color: #555; }
    </style>
</head>
<body>
    <h1>Invoice {{invoice.number.series}}{{invoice.number.separator}}{{invoice.number.id}}</h1>
    <p>Date: {{invoice.date}} &mdash; Due: {{invoice.dueDate}}</p>

    <div class="parties">
        <div>
            <p><strong>Seller</strong></p>
            <p>{{seller.company}}</p>
            <p>Reg. no: {{seller.registrationNumber}}</p>
            <p>Tax ID: {{seller.taxId}}</p>
            <p>{{seller.address.street}} {{seller.address.number}},
               {{seller.address.zip}} {{seller.address.city}},
               {{seller.address.region}}, {{seller.address.country}}</p>
            <p>{{seller.phone}} &middot; {{seller.email}} &middot; {{seller.website}}</p>
            <p>{{seller.bank.name}} {{seller.bank.swift}} {{seller.bank.iban}}</p>
        </div>
        <div>
            <p><strong>Buyer</strong></p>
            <p>{{buyer.company}}</p>
            <p>Tax ID: {{buyer.taxId}}</p>
            <p>{{buyer.address.street}} {{buyer.address.number}},
               {{buyer.address.zip}} {{buyer.address.city}},
               {{buyer.address.region}}, {{buyer.address.country}}</p>
            <p>{{buyer.phone}} &middot; {{buyer.email}} &middot; {{buyer.website}}</p>
        </div>
    </div>

    <table>
        <tr>
            <th>#</th>
            <th>Description</th>
            <th>Unit</th>
            <th>Qty</th>
            <th>Unit price ({{invoice.currency.main}})</th>
            <th>Unit price ({{invoice.currency.secondary}})</th>
            <th>Amount ({{invoice.currency.main}})</th>
            <th>Amount ({{invoice.currency.secondary}})</th>
        </tr>
{{{rows}}}
    </table>

    <p class="totals">
        Total: {{total.main}} {{invoice.currency.main}} /
        {{total.secondary}} {{invoice.currency.secondary}}
    </p>

    <p class="explanation">{{invoice.explanation}}</p>
</body>
</html>
"##
}

/// Default per-line-item row block.
pub fn default_row_template() -> &'static str {
    r##"        <tr>
            <td>{{index}}</td>
            <td>{{description}}</td>
            <td>{{unit}}</td>
            <td>{{quantity}}</td>
            <td>{{unitPrice.main}}</td>
            <td>{{unitPrice.secondary}}</td>
            <td>{{amount.main}}</td>
            <td>{{amount.secondary}}</td>
        </tr>
"##
}

/// Minimal template pair for unit testing: root shows only the rows and the
/// totals, the row block one amount.
pub fn minimal_root_template() -> &'static str {
    "<div>{{{rows}}}total {{total.main}}|{{total.secondary}}</div>"
}

/// Row block matching [`minimal_root_template`].
pub fn minimal_row_template() -> &'static str {
    "[{{index}}:{{description}} {{amount.main}}|{{amount.secondary}}]"
}
